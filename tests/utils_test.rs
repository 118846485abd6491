use solosong::utils::*;

#[test]
fn test_generate_random_string_length_and_alphabet() {
    for length in [0, 1, 16, 64, 128] {
        let value = generate_random_string(length);

        // Should be exactly the requested length
        assert_eq!(value.len(), length);

        // Should contain only alphanumeric characters
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn test_generate_state() {
    let state = generate_state();
    assert_eq!(state.len(), STATE_LENGTH);
    assert_eq!(STATE_LENGTH, 16);

    // Two generated states should be different
    let state2 = generate_state();
    assert_ne!(state, state2);
}

#[test]
fn test_generate_random_string_uses_whole_alphabet() {
    let sample = generate_random_string(10_000);

    assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
    assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
    assert!(sample.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_basic_auth() {
    // base64("client-id:client-secret")
    assert_eq!(
        basic_auth("client-id", "client-secret"),
        "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ="
    );
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("plain text"), "plain text");
    assert_eq!(
        escape_html(r#"<script>alert("x")</script>"#),
        "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
    );
    assert_eq!(escape_html("Tom & Jerry's"), "Tom &amp; Jerry&#x27;s");
    assert_eq!(escape_html("Sigur Rós"), "Sigur Rós");
}
