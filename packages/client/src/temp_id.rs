// ABOUTME: Temporary identifiers for entities that exist only locally until the server confirms them
// ABOUTME: Format is tmp-<unix millis>-<6 base36 chars>, never produced by the server

use carryover_core::TEMP_ID_PREFIX;
use chrono::{DateTime, Utc};
use rand::Rng;

const SUFFIX_LEN: usize = 6;
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub fn generate_temp_id(now: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();
    format!("{}{}-{}", TEMP_ID_PREFIX, now.timestamp_millis(), suffix)
}

pub fn is_temporary_id(id: &str) -> bool {
    id.starts_with(TEMP_ID_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carryover_core::generate_id;

    #[test]
    fn test_temp_id_format() {
        let now = DateTime::parse_from_rfc3339("2024-01-03T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let id = generate_temp_id(now);

        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "tmp");
        assert_eq!(parts[1], now.timestamp_millis().to_string());
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert!(is_temporary_id(&id));
    }

    #[test]
    fn test_server_ids_are_never_temporary() {
        for _ in 0..200 {
            assert!(!is_temporary_id(&generate_id()));
        }
    }
}
