use crate::commands::propagation::describe;
use crate::commands::propagation::split_field_path;
use gqlkit_core::schema::NullAbsorber;
use gqlkit_core::schema::NullPropagation;

#[test]
fn field_paths_split_on_dots() {
    assert_eq!(split_field_path("viewer.friends.name"), vec!["viewer", "friends", "name"]);
    assert_eq!(split_field_path(" viewer . name. "), vec!["viewer", "name"]);
    assert!(split_field_path("").is_empty());
}

#[test]
fn descriptions_name_the_absorber() {
    let propagation = NullPropagation {
        absorbed_by: NullAbsorber::Field {
            coordinate: "Query.viewer".to_string(),
            path_index: 0,
        },
        blast_radius: 1,
    };

    assert_eq!(
        describe("viewer.name", &propagation),
        "A null from `viewer.name` is absorbed by field `Query.viewer`.\n\
        Fields above it that lose their value: 1",
    );
}
