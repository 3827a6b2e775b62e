use std::collections::HashSet;

use backend::domain::{CategoryId, PageNumber, PageSize, QuizRng, QuizScope, SearchTerm};
use backend::errors::domain::{DomainError, NotFoundKind};
use backend::services::TriviaService;

use crate::support::build_test_state;
use crate::support::factory::{seed_question, seed_questions, ART, HISTORY, SCIENCE};

#[tokio::test]
async fn questions_page_past_end_is_page_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");
    seed_questions(db, 10, SCIENCE).await?;

    let service = TriviaService::new();
    let size = PageSize::default();

    let first = service
        .questions_page(db, PageNumber::new(1)?, size)
        .await?;
    assert_eq!(first.questions.len(), 10);
    assert_eq!(first.total_questions, 10);

    let err = service
        .questions_page(db, PageNumber::new(2)?, size)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Page, _)));
    Ok(())
}

#[tokio::test]
async fn category_view_requires_known_category() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");
    seed_questions(db, 2, ART).await?;

    let service = TriviaService::new();
    let (category, page) = service
        .category_questions(db, CategoryId(ART), PageNumber::FIRST, PageSize::default())
        .await?;
    assert_eq!(category.kind, "Art");
    assert_eq!(page.total_questions, 2);

    let err = service
        .category_questions(db, CategoryId(12), PageNumber::FIRST, PageSize::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Category, _)));
    Ok(())
}

#[tokio::test]
async fn search_covers_question_text_only() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");
    let hit = seed_question(db, "Which dung beetle was worshipped?", HISTORY).await?;
    seed_question(db, "Who painted the Mona Lisa?", ART).await?;

    let service = TriviaService::new();
    let found = service
        .search_questions(db, &SearchTerm::new("BEETLE")?)
        .await?;
    assert_eq!(found.iter().map(|q| q.id).collect::<Vec<_>>(), vec![hit.id]);

    // Answers are not searched.
    let none = service
        .search_questions(db, &SearchTerm::new("answer to")?)
        .await?;
    assert!(none.is_empty());
    Ok(())
}

#[tokio::test]
async fn seeded_quiz_never_repeats_and_stays_in_scope() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");
    seed_questions(db, 4, SCIENCE).await?;
    let history: HashSet<i64> = seed_questions(db, 5, HISTORY)
        .await?
        .into_iter()
        .map(|q| q.id)
        .collect();

    let service = TriviaService::new();
    let rng = QuizRng::new(Some(42));
    let scope = QuizScope::from_category_id(Some(HISTORY));
    let mut asked = HashSet::new();

    while let Some(q) = service
        .next_quiz_question(db, &rng, scope, &asked)
        .await?
    {
        assert!(history.contains(&q.id));
        assert!(asked.insert(q.id), "question {} repeated", q.id);
    }
    assert_eq!(asked, history);
    Ok(())
}

#[tokio::test]
async fn quiz_with_unknown_category_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");

    let err = TriviaService::new()
        .next_quiz_question(
            db,
            &QuizRng::new(Some(1)),
            QuizScope::from_category_id(Some(77)),
            &HashSet::new(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Category, _)));
    Ok(())
}
