const PORTRAIT_BASE_URL: &str = "https://schaledb.com/images/student/collection";

/// Illustration URL for a character id.
pub fn portrait_url(id: &str) -> String {
    format!("{}/{}.webp", PORTRAIT_BASE_URL, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_collection_url_from_id() {
        assert_eq!(
            portrait_url("10000"),
            "https://schaledb.com/images/student/collection/10000.webp"
        );
    }
}
