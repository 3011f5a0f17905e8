//! Encode/decode round-trip integration tests.

#[cfg(test)]
mod tests {
    use xmlmarshal_model::{Value, record};

    use crate::{marshaller, without_type};

    fn round_trip(value: &Value) -> Value {
        let m = marshaller();
        let xml = m.encode(value, "r").expect("encode");
        without_type(m.decode(&xml).expect("decode"))
    }

    #[test]
    fn test_should_round_trip_nested_string_records() {
        let value = Value::Record(record! {
            "@id" => "42",
            "title" => "hello",
            "author" => record! {
                "@role" => "admin",
                "name" => "bob",
                "emails" => vec!["a@example.com", "b@example.com"],
            },
            "comments" => vec![
                Value::Record(record! { "@n" => "1", "text" => "first" }),
                Value::Record(record! { "@n" => "2", "text" => "second" }),
            ],
        });

        assert_eq!(round_trip(&value), value);
    }

    #[test]
    fn test_should_round_trip_list_of_three() {
        let value = Value::Record(record! { "tags" => vec!["x", "y", "z"] });
        let back = round_trip(&value);

        assert_eq!(back, value);
        let tags: Vec<&str> = back.items("tags").into_iter().filter_map(Value::as_str).collect();
        assert_eq!(tags, ["x", "y", "z"]);
    }

    #[test]
    fn test_should_collapse_single_item_list_to_scalar() {
        let value = Value::Record(record! { "tags" => vec!["only"] });
        let back = round_trip(&value);

        assert_eq!(back, Value::Record(record! { "tags" => "only" }));
    }

    #[test]
    fn test_should_round_trip_special_characters() {
        let value = Value::Record(record! {
            "@q" => r#"<"quoted"> & 'single'"#,
            "body" => "if a < b && c > d { return \"x\"; }",
            "unicode" => "grüße, 世界",
        });

        assert_eq!(round_trip(&value), value);
    }

    #[test]
    fn test_should_return_primitives_as_strings() {
        let value = Value::Record(record! { "@n" => 5, "flag" => false, "ratio" => 0.25 });
        let back = round_trip(&value);

        let expected = record! { "@n" => "5", "flag" => "false", "ratio" => "0.25" };
        assert_eq!(back, Value::Record(expected));
    }

    #[test]
    fn test_should_drop_null_fields_on_round_trip() {
        let value = Value::Record(record! { "a" => "x", "b" => Value::Null });
        assert_eq!(round_trip(&value), Value::Record(record! { "a" => "x" }));
    }
}
