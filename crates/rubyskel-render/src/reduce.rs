use rubyskel_model::Keyed;

/// The authoritative definition in a sequence: the last one appended.
pub fn representative<T>(definitions: &[T]) -> Option<&T> {
	definitions.iter().fold(None, |_, definition| Some(definition))
}

/// Walk a keyed collection in insertion order, yielding one representative per name.
///
/// Empty names and names whose sequence is empty yield nothing.
pub fn representatives<T>(collection: &Keyed<T>) -> impl Iterator<Item = &T> {
	collection
		.iter()
		.filter(|(name, _)| !name.is_empty())
		.filter_map(|(_, definitions)| representative(definitions))
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rubyskel_model::{Keyed, Namespace, push_keyed};

	use super::*;

	#[test]
	fn last_definition_wins() {
		assert_eq!(representative(&[1, 2, 3]), Some(&3));
		assert_eq!(representative::<u8>(&[]), None);
	}

	#[test]
	fn empty_names_and_sequences_are_skipped() {
		let mut collection: Keyed<Namespace> = Keyed::new();
		collection.insert("Ghost".into(), Vec::new());
		push_keyed(&mut collection, "", Namespace::module(""));
		push_keyed(&mut collection, "Real", Namespace::module("Real"));

		let names: Vec<&str> = representatives(&collection)
			.map(|ns| ns.name.as_str())
			.collect();
		assert_eq!(names, vec!["Real"]);
	}

	#[test]
	fn earlier_definitions_are_ignored() {
		let mut collection: Keyed<Namespace> = Keyed::new();
		push_keyed(&mut collection, "D", Namespace::class("D", None).with_comment("first"));
		push_keyed(&mut collection, "D", Namespace::class("D", None).with_comment("second"));

		let picked: Vec<&str> = representatives(&collection)
			.map(|ns| ns.comment.as_str())
			.collect();
		assert_eq!(picked, vec!["second"]);
	}
}
