use std::io::Write;

use lambda_runtime::{Error, LambdaEvent};
use serde::Deserialize;
use tracing::{debug, info, info_span};

use crate::error::{NotifierError, NotifierResult};
use crate::models::{NotificationEvent, NotificationRecord};

pub const UPLOAD_NOTICE_PREFIX: &str = "New file uploaded:";

/// Writes one line per record to `sink`, in input order.
///
/// Stops at the first record without an object key; lines already written
/// for earlier records stay written. Returns the number of lines emitted.
pub fn notify<W: Write>(event: &NotificationEvent, sink: &mut W) -> NotifierResult<usize> {
    let mut emitted = 0;

    for (index, raw) in event.records.iter().enumerate() {
        let record = NotificationRecord::deserialize(raw)
            .map_err(|source| NotifierError::MalformedRecord { index, source })?;

        writeln!(sink, "{} {}", UPLOAD_NOTICE_PREFIX, record.object_key())?;
        emitted += 1;

        debug!(
            index,
            key = %record.object_key(),
            bucket = record.bucket_name(),
            size = record.s3.object.size,
            event_name = record.event_name.as_deref(),
            "Record processed"
        );
    }

    sink.flush()?;
    Ok(emitted)
}

/// Lambda entry point; the log sink is standard output.
pub(crate) async fn function_handler(event: LambdaEvent<NotificationEvent>) -> Result<(), Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("notification", request_id = %context.request_id);
    let _guard = span.enter();

    let stdout = std::io::stdout();
    let emitted = notify(&payload, &mut stdout.lock())?;

    info!(records = emitted, "Notification processed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn event(value: serde_json::Value) -> NotificationEvent {
        serde_json::from_value(value).unwrap()
    }

    fn lines(sink: &[u8]) -> Vec<String> {
        String::from_utf8(sink.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_emits_one_line_per_record_in_order() {
        let event = event(json!({
            "Records": [
                {"s3": {"object": {"key": "a.txt"}}},
                {"s3": {"object": {"key": "b.txt"}}}
            ]
        }));
        let mut sink = Vec::new();

        let emitted = notify(&event, &mut sink).unwrap();

        assert_eq!(emitted, 2);
        assert_eq!(
            lines(&sink),
            vec![
                "New file uploaded: a.txt".to_string(),
                "New file uploaded: b.txt".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_event_emits_nothing() {
        let event = event(json!({"Records": []}));
        let mut sink = Vec::new();

        assert_eq!(notify(&event, &mut sink).unwrap(), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_stops_at_first_record_without_key() {
        let event = event(json!({
            "Records": [
                {"s3": {"object": {"key": "first.txt"}}},
                {"s3": {"object": {}}},
                {"s3": {"object": {"key": "never.txt"}}}
            ]
        }));
        let mut sink = Vec::new();

        let err = notify(&event, &mut sink).unwrap_err();

        assert!(matches!(err, NotifierError::MalformedRecord { index: 1, .. }));
        assert_eq!(lines(&sink), vec!["New file uploaded: first.txt".to_string()]);
    }

    #[test]
    fn test_missing_s3_entity_fails_at_first_record() {
        let event = event(json!({"Records": [{"eventName": "ObjectCreated:Put"}]}));
        let mut sink = Vec::new();

        let err = notify(&event, &mut sink).unwrap_err();

        assert!(matches!(err, NotifierError::MalformedRecord { index: 0, .. }));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_keys_are_emitted_verbatim() {
        let event = event(json!({
            "Records": [
                {
                    "eventName": "ObjectCreated:Put",
                    "s3": {
                        "bucket": {"name": "my-s3-file-manager-atulkamble"},
                        "object": {"key": "docs/my+report%281%29.txt", "size": 12}
                    }
                }
            ]
        }));
        let mut sink = Vec::new();

        notify(&event, &mut sink).unwrap();

        assert_eq!(
            lines(&sink),
            vec!["New file uploaded: docs/my+report%281%29.txt".to_string()]
        );
    }

    #[tokio::test]
    async fn test_function_handler_accepts_well_formed_event() {
        let payload = event(json!({"Records": [{"s3": {"object": {"key": "a.txt"}}}]}));
        let lambda_event = LambdaEvent::new(payload, lambda_runtime::Context::default());

        assert!(function_handler(lambda_event).await.is_ok());
    }

    #[tokio::test]
    async fn test_function_handler_rejects_malformed_record() {
        let payload = event(json!({"Records": [{"s3": {}}]}));
        let lambda_event = LambdaEvent::new(payload, lambda_runtime::Context::default());

        let err = function_handler(lambda_event).await.unwrap_err();
        assert!(err.to_string().starts_with("Record 0 has no s3.object.key"));
    }
}
