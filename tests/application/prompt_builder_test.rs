use concierge::application::services::{KEYWORD_EXCERPT_CHARS, PromptBuilder};
use concierge::domain::{ExtractedText, Role, Session, SessionId, Turn};

fn session(turns: Vec<Turn>) -> Session {
    Session::new(SessionId::new(), turns)
}

#[test]
fn given_empty_session_when_building_chat_prompt_then_contains_system_and_message() {
    let builder = PromptBuilder::default();

    let request = builder.chat(&session(vec![]), "hello");

    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::System);
    assert!(request.messages[0].content.contains("warm"));
    assert_eq!(request.messages[1].role, Role::User);
    assert_eq!(request.messages[1].content, "hello");
}

#[test]
fn given_prior_turns_when_building_chat_prompt_then_replays_them_in_order_before_message() {
    let builder = PromptBuilder::default();
    let history = session(vec![Turn::user("hello"), Turn::assistant("hi there")]);

    let request = builder.chat(&history, "and then?");

    let transcript: Vec<(Role, &str)> = request
        .messages
        .iter()
        .skip(1)
        .map(|m| (m.role, m.content.as_str()))
        .collect();
    assert_eq!(
        transcript,
        vec![
            (Role::User, "hello"),
            (Role::Assistant, "hi there"),
            (Role::User, "and then?"),
        ]
    );
}

#[test]
fn given_history_longer_than_window_when_building_chat_prompt_then_keeps_latest_turns() {
    let builder = PromptBuilder::new("system".to_string(), 2);
    let history = session(vec![
        Turn::user("one"),
        Turn::assistant("two"),
        Turn::user("three"),
        Turn::assistant("four"),
    ]);

    let request = builder.chat(&history, "five");

    let contents: Vec<&str> = request.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["system", "three", "four", "five"]);
}

#[test]
fn given_document_when_building_summary_prompt_then_demands_sections_without_history() {
    let builder = PromptBuilder::default();
    let document = ExtractedText::capped("The office moves on Monday.".to_string(), 1000);

    let request = builder.summarize(&document);

    assert_eq!(request.messages.len(), 2);
    let instruction = &request.messages[1].content;
    assert!(instruction.contains("Title:"));
    assert!(instruction.contains("3-6 bullet points"));
    assert!(instruction.contains("Suggested action:"));
    assert!(instruction.ends_with("The office moves on Monday."));
    assert!(!instruction.contains("truncated"));
}

#[test]
fn given_truncated_document_when_building_summary_prompt_then_mentions_original_length() {
    let builder = PromptBuilder::default();
    let document = ExtractedText::capped("a".repeat(50), 10);

    let request = builder.summarize(&document);

    assert!(request.messages[1].content.contains("original length 50 characters"));
}

#[test]
fn given_long_document_when_building_keyword_prompt_then_uses_bounded_excerpt() {
    let builder = PromptBuilder::default();
    let document = ExtractedText::capped("x".repeat(KEYWORD_EXCERPT_CHARS * 2), usize::MAX);

    let request = builder.keywords(&document);

    let (_, excerpt) = request.messages[1]
        .content
        .split_once("Excerpt:\n")
        .expect("excerpt marker");
    assert_eq!(excerpt.chars().count(), KEYWORD_EXCERPT_CHARS);
}

#[test]
fn given_builder_when_building_probe_then_request_is_not_blank() {
    let request = PromptBuilder::default().connectivity_probe();

    assert!(!request.is_blank());
    assert_eq!(request.messages.last().unwrap().role, Role::User);
}
