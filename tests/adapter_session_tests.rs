//! Adapter acceptance tests - a scripted harness session over the JSON protocol

use tilt_2048::adapter::{serve, Session};

fn handle(session: &mut Session, line: &str) -> serde_json::Value {
    serde_json::from_str(&session.handle_line(line)).expect("response is valid JSON")
}

#[test]
fn test_scripted_game_through_the_protocol() {
    let mut session = Session::new();

    let state = handle(&mut session, r#"{"type":"new","size":4}"#);
    assert_eq!(state["type"], "state");
    assert_eq!(state["size"], 4);
    assert_eq!(state["score"], 0);

    handle(&mut session, r#"{"type":"add","col":0,"row":0,"value":2}"#);
    handle(&mut session, r#"{"type":"add","col":0,"row":3,"value":2}"#);

    let tilted = handle(&mut session, r#"{"type":"tilt","direction":"up"}"#);
    assert_eq!(tilted["changed"], true);
    assert_eq!(tilted["score"], 4);
    assert_eq!(tilted["board"][3][0], 4);

    // A tilt that cannot move anything reports changed = false.
    let tilted = handle(&mut session, r#"{"type":"tilt","direction":"up"}"#);
    assert_eq!(tilted["changed"], false);
    assert_eq!(tilted["score"], 4);

    let cleared = handle(&mut session, r#"{"type":"clear"}"#);
    assert_eq!(cleared["score"], 0);
    assert_eq!(cleared["game_over"], false);
}

#[test]
fn test_protocol_errors_do_not_kill_the_session() {
    let mut session = Session::new();

    let err = handle(&mut session, r#"{"type":"add","col":9,"row":0,"value":2}"#);
    assert_eq!(err["type"], "error");

    let err = handle(&mut session, r#"{"type":"tilt","direction":"diagonal"}"#);
    assert_eq!(err["type"], "error");

    let err = handle(&mut session, "not json at all");
    assert_eq!(err["type"], "error");

    // The session still answers normal queries afterward.
    let state = handle(&mut session, r#"{"type":"query"}"#);
    assert_eq!(state["type"], "state");
}

#[tokio::test]
async fn test_serve_end_to_end() {
    let input = concat!(
        r#"{"type":"add","col":1,"row":0,"value":2}"#,
        "\n",
        r#"{"type":"add","col":1,"row":2,"value":2}"#,
        "\n",
        r#"{"type":"tilt","direction":"down"}"#,
        "\n",
    );

    let mut output = Vec::new();
    serve(input.as_bytes(), &mut output).await.unwrap();

    let last = std::str::from_utf8(&output).unwrap().lines().last().unwrap();
    let state: serde_json::Value = serde_json::from_str(last).unwrap();
    assert_eq!(state["changed"], true);
    assert_eq!(state["board"][0][1], 4);
}
