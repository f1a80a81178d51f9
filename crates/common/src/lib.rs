pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_status() {
        let h = types::Health { status: "ok" };
        let body = serde_json::to_value(&h).expect("serialize health");
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }
}
