//! Encoding integration tests.

#[cfg(test)]
mod tests {
    use xmlmarshal_core::{MarshalConfig, MarshalError};
    use xmlmarshal_model::{Record, Value, record};
    use xmlmarshal_xml::{DOC_DECLARATION, Marshaller};

    use crate::marshaller;

    #[test]
    fn test_should_encode_attribute_and_element() {
        let value = Value::Record(record! { "@id" => 5, "name" => "a" });

        let xml = marshaller().encode(&value, "root").expect("encode");

        assert_eq!(
            xml,
            format!(r#"{DOC_DECLARATION}<root id="5"><name>a</name></root>"#)
        );
    }

    #[test]
    fn test_should_reject_null_list_and_opaque_roots() {
        let m = marshaller();
        for value in [Value::Null, Value::from(vec![1, 2]), Value::Opaque] {
            let result = m.encode(&value, "r");
            assert!(
                matches!(result, Err(MarshalError::InvalidArgument(_))),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_should_emit_list_items_as_ordered_siblings() {
        let value = Value::Record(record! { "tags" => vec!["x", "y", "z"] });

        let xml = marshaller().encode(&value, "r").expect("encode");

        assert_eq!(
            xml,
            format!("{DOC_DECLARATION}<r><tags>x</tags><tags>y</tags><tags>z</tags></r>")
        );
    }

    #[test]
    fn test_should_trim_attribute_name() {
        let value = Value::Record(record! { "@ foo " => "bar" });

        let xml = marshaller().encode(&value, "r").expect("encode");

        assert_eq!(xml, format!("{DOC_DECLARATION}<r foo=\"bar\"/>"));
    }

    #[test]
    fn test_should_stringify_primitives_canonically() {
        let value = Value::Record(record! {
            "@count" => 5,
            "@ratio" => 2.0,
            "@half" => 0.5,
            "@enabled" => true,
        });

        let xml = marshaller().encode(&value, "r").expect("encode");

        let root = r#"<r count="5" ratio="2" half="0.5" enabled="true"/>"#;
        assert!(xml.ends_with(root));
    }

    #[test]
    fn test_should_omit_null_fields() {
        let value = Value::Record(record! {
            "alias" => "bob",
            "content" => Value::Null,
            "@id" => Value::Null,
            "onClick" => Value::Opaque,
        });

        let xml = marshaller().encode(&value, "chatEntry").expect("encode");

        assert_eq!(
            xml,
            format!("{DOC_DECLARATION}<chatEntry><alias>bob</alias></chatEntry>")
        );
    }

    #[test]
    fn test_should_encode_flattened_layers_with_nearest_winning() {
        let base = record! { "@id" => "base", "created" => "yesterday" };
        let derived = record! { "alias" => "bob", "@id" => "derived" };

        let value = Value::Record(Record::flatten([derived, base]));
        let xml = marshaller().encode(&value, "entry").expect("encode");

        assert_eq!(
            xml,
            format!(
                "{DOC_DECLARATION}<entry id=\"derived\"><alias>bob</alias>\
                 <created>yesterday</created></entry>"
            )
        );
    }

    #[test]
    fn test_should_report_runaway_depth_as_resource_exhaustion() {
        let mut value = Value::from("leaf");
        for _ in 0..100 {
            value = Value::Record(record! { "child" => value });
        }

        let m = Marshaller::new(MarshalConfig::with_max_depth(50));
        assert!(matches!(
            m.encode(&value, "r"),
            Err(MarshalError::ResourceExhaustion { .. })
        ));
        assert!(marshaller().encode(&value, "r").is_ok());
    }
}
