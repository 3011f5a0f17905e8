//! Chat entry exchange tests: the typed records the chat client posts and
//! lists, over both XML and JSON bodies.

#[cfg(test)]
mod tests {
    use xmlmarshal_model::{ChatEntry, ToValue, Value};
    use xmlmarshal_xml::DOC_DECLARATION;

    use crate::marshaller;

    #[test]
    fn test_should_post_chat_entry_as_xml() {
        let entry = ChatEntry::new("alice", "hello & welcome", 1_700_000_000_123);

        let xml = marshaller()
            .encode_typed(&entry, ChatEntry::ROOT)
            .expect("encode");

        assert_eq!(
            xml,
            format!(
                "{DOC_DECLARATION}<chatEntry><alias>alice</alias>\
                 <content>hello &amp; welcome</content>\
                 <timestamp>1700000000123</timestamp></chatEntry>"
            )
        );
    }

    #[test]
    fn test_should_list_any_number_of_entries() {
        let m = marshaller();
        let entries = vec![
            ChatEntry::new("alice", "hi", 1),
            ChatEntry::new("bob", "hey", 2),
            ChatEntry::new("carol", "yo", 3),
        ];

        for count in 0..=entries.len() {
            let slice = &entries[..count];
            let xml = m
                .encode(&ChatEntry::list_to_value(slice), ChatEntry::LIST_ROOT)
                .expect("encode");
            let decoded = m.decode(&xml).expect("decode");

            assert_eq!(
                decoded.get("type").and_then(Value::as_str),
                Some(ChatEntry::LIST_ROOT)
            );
            let back = ChatEntry::list_from_value(&decoded).expect("entries");
            assert_eq!(back, slice, "list of {count} entries");
        }
    }

    #[test]
    fn test_should_carry_same_entry_over_json_and_xml() {
        let entry = ChatEntry::new("dave", "<b>bold</b>", 42);

        let json = serde_json::to_string(&entry).expect("serialize");
        let from_json = Value::from_json_str(&json).expect("parse JSON");
        assert_eq!(from_json, entry.to_value());

        let m = marshaller();
        let xml = m.encode(&from_json, ChatEntry::ROOT).expect("encode");
        let back: ChatEntry = m.decode_typed(&xml).expect("decode");
        assert_eq!(back, entry);
    }
}
