//! Decoding integration tests.

#[cfg(test)]
mod tests {
    use xmlmarshal_core::{MarshalConfig, MarshalError};
    use xmlmarshal_model::{Value, record};
    use xmlmarshal_xml::Marshaller;

    use crate::marshaller;

    #[test]
    fn test_should_fold_repeated_elements_and_add_type() {
        let value = marshaller()
            .decode(r#"<root a="1"><b>x</b><b>y</b></root>"#)
            .expect("decode");

        assert_eq!(
            value,
            Value::Record(record! {
                "@a" => "1",
                "b" => vec!["x", "y"],
                "type" => "root",
            })
        );
    }

    #[test]
    fn test_should_decode_empty_root_to_type_only() {
        let value = marshaller().decode("<root/>").expect("decode");
        assert_eq!(value, Value::Record(record! { "type" => "root" }));
    }

    #[test]
    fn test_should_ignore_text_of_bare_root() {
        let value = marshaller().decode("<count>5</count>").expect("decode");
        assert_eq!(value, Value::Record(record! { "type" => "count" }));
    }

    #[test]
    fn test_should_reject_unterminated_tag() {
        let result = marshaller().decode("<root><a></a>");
        assert!(matches!(result, Err(MarshalError::Parse { .. })));
    }

    #[test]
    fn test_should_reject_garbage() {
        for text in ["", "not xml", "<root", "<a></b>", "<a x=1/>", "<a/><b/>"] {
            assert!(
                matches!(marshaller().decode(text), Err(MarshalError::Parse { .. })),
                "{text:?} should fail to parse"
            );
        }
    }

    #[test]
    fn test_should_keep_whitespace_in_leaf_text() {
        let xml = "<?xml version=\"1.0\"?>\n<msg>\n  <content>  two  spaces  </content>\n</msg>\n";
        let value = marshaller().decode(xml).expect("decode");
        assert_eq!(
            value.get("content").and_then(Value::as_str),
            Some("  two  spaces  ")
        );
    }

    #[test]
    fn test_should_shape_fields_by_multiplicity() {
        let xml = "<list><one>a</one><many>b</many><many>c</many></list>";
        let value = marshaller().decode(xml).expect("decode");

        assert!(value.get("one").is_some_and(|v| !v.is_list()));
        assert!(value.get("many").is_some_and(Value::is_list));
        assert!(value.get("none").is_none());
        assert_eq!(value.items("one").len(), 1);
        assert_eq!(value.items("many").len(), 2);
        assert!(value.items("none").is_empty());
    }

    #[test]
    fn test_should_decode_nested_records() {
        let xml = r#"<post version="2"><author id="u1"><name>bob</name></author><empty/></post>"#;
        let value = marshaller().decode(xml).expect("decode");

        assert_eq!(
            value,
            Value::Record(record! {
                "@version" => "2",
                "author" => record! { "@id" => "u1", "name" => "bob" },
                "empty" => "",
                "type" => "post",
            })
        );
    }

    #[test]
    fn test_should_overwrite_real_type_field() {
        let value = marshaller()
            .decode("<entry><type>custom</type></entry>")
            .expect("decode");
        assert_eq!(value.get("type").and_then(Value::as_str), Some("entry"));
    }

    #[test]
    fn test_should_report_deep_documents_as_resource_exhaustion() {
        let xml = format!("{}{}", "<a>".repeat(20), "</a>".repeat(20));
        let m = Marshaller::new(MarshalConfig::with_max_depth(10));

        assert!(matches!(
            m.decode(&xml),
            Err(MarshalError::ResourceExhaustion { depth: 11 })
        ));
        assert!(marshaller().decode(&xml).is_ok());
    }
}
