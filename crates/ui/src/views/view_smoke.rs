use super::test_harness::setup_view_harness;
use crate::vm::QuizIntent;

#[test]
fn start_screen_smoke_renders_the_session_size() {
    let mut harness = setup_view_harness(5, 3);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("General Knowledge Quiz"), "missing title in {html}");
    assert!(
        html.contains("You will be asked 3 random questions"),
        "missing hint in {html}"
    );
    assert!(html.contains("Start quiz"), "missing start button in {html}");
}

#[test]
fn starting_shows_the_first_question_with_its_options() {
    let mut harness = setup_view_harness(5, 3);
    harness.rebuild();
    harness.dispatch(QuizIntent::Start);

    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing counter in {html}");
    assert!(html.contains("Alpha"), "missing option in {html}");
    assert!(html.contains("Beta"), "missing option in {html}");
    assert!(html.contains("Gamma"), "missing option in {html}");
    assert!(html.contains("Next question"), "missing advance button in {html}");
}

#[test]
fn advancing_without_a_selection_stays_on_the_question() {
    let mut harness = setup_view_harness(5, 3);
    harness.rebuild();
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::Next);

    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "first question left too early: {html}");
}

#[test]
fn selecting_marks_the_option_and_unlocks_advancing() {
    let mut harness = setup_view_harness(5, 3);
    harness.rebuild();
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::SelectAnswer("Beta".to_string()));

    let html = harness.render();
    assert!(html.contains("quiz-option--selected"), "missing selected state in {html}");

    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Question 2 of 3"), "missing second question in {html}");
}

#[test]
fn the_last_question_offers_results_instead_of_next() {
    let mut harness = setup_view_harness(4, 2);
    harness.rebuild();
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::SelectAnswer("Alpha".to_string()));
    harness.dispatch(QuizIntent::Next);

    let html = harness.render();
    assert!(html.contains("Question 2 of 2"), "missing counter in {html}");
    assert!(html.contains("Show results"), "missing results label in {html}");
}

#[test]
fn results_smoke_renders_score_review_and_restart() {
    let mut harness = setup_view_harness(5, 3);
    harness.rebuild();
    harness.dispatch(QuizIntent::Start);

    // One wrong answer out of three.
    harness.dispatch(QuizIntent::SelectAnswer("Beta".to_string()));
    harness.dispatch(QuizIntent::Next);
    harness.dispatch(QuizIntent::SelectAnswer("Alpha".to_string()));
    harness.dispatch(QuizIntent::Next);
    harness.dispatch(QuizIntent::SelectAnswer("Alpha".to_string()));
    harness.dispatch(QuizIntent::Next);

    let html = harness.render();
    assert!(html.contains("Quiz complete"), "missing results title in {html}");
    assert!(html.contains("67%"), "missing percent in {html}");
    assert!(
        html.contains("You answered 2 of 3 questions correctly."),
        "missing tally in {html}"
    );
    assert!(html.contains("score--medium"), "missing score tier in {html}");
    assert!(html.contains("Time taken: 0:00"), "missing elapsed line in {html}");
    assert!(html.contains("review-card--incorrect"), "missing wrong review card in {html}");
    assert!(
        html.contains("review-option--incorrect"),
        "missing wrong option highlight in {html}"
    );
    assert!(html.contains("Play again"), "missing restart button in {html}");
}

#[test]
fn restart_returns_to_the_start_screen() {
    let mut harness = setup_view_harness(4, 2);
    harness.rebuild();
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::SelectAnswer("Alpha".to_string()));
    harness.dispatch(QuizIntent::Next);
    harness.dispatch(QuizIntent::SelectAnswer("Alpha".to_string()));
    harness.dispatch(QuizIntent::Next);
    harness.dispatch(QuizIntent::Restart);

    let html = harness.render();
    assert!(html.contains("Start quiz"), "missing start button in {html}");
    assert!(
        html.contains("You will be asked 2 random questions"),
        "missing hint in {html}"
    );
}

#[test]
fn an_undersized_bank_renders_the_config_error() {
    let mut harness = setup_view_harness(2, 5);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("This quiz cannot start"), "missing error title in {html}");
    assert!(
        html.contains("bank holds 2 questions but the session needs 5"),
        "missing error detail in {html}"
    );
}
