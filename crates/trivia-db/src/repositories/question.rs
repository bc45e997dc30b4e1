use sqlx::{Executor, Postgres};

use crate::models::{NewQuestion, Question};

pub async fn list_page<'e, E>(executor: E, limit: i64, offset: i64) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await
}

pub async fn count_all<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let (count,): (i64,) = sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*) FROM questions
        "#,
    )
    .fetch_one(executor)
    .await?;

    Ok(count)
}

pub async fn list_page_by_category<'e, E>(
    executor: E,
    category_id: i32,
    limit: i64,
    offset: i64,
) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
        "#,
    )
    .bind(category_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await
}

pub async fn count_by_category<'e, E>(executor: E, category_id: i32) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let (count,): (i64,) = sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*) FROM questions WHERE category = $1
        "#,
    )
    .bind(category_id)
    .fetch_one(executor)
    .await?;

    Ok(count)
}

/// Case-insensitive substring search on the question text.
///
/// `%`, `_` and `\` in the term match literally.
pub async fn search<'e, E>(executor: E, term: &str) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY id
        "#,
    )
    .bind(escape_like(term))
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e, E>(executor: E, question_id: i32) -> Result<Option<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
        "#,
    )
    .bind(question_id)
    .fetch_optional(executor)
    .await
}

pub async fn insert<'e, E>(executor: E, new_question: &NewQuestion) -> Result<i32, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let (id,): (i32,) = sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
        "#,
    )
    .bind(&new_question.question)
    .bind(&new_question.answer)
    .bind(new_question.category)
    .bind(new_question.difficulty)
    .fetch_one(executor)
    .await?;

    Ok(id)
}

/// Delete a question, returning the number of rows removed.
pub async fn delete<'e, E>(executor: E, question_id: i32) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM questions WHERE id = $1
        "#,
    )
    .bind(question_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// Ids of every question in a category, or of every question when `category_id` is `None`.
pub async fn list_ids<'e, E>(executor: E, category_id: Option<i32>) -> Result<Vec<i32>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT id
            FROM questions
            WHERE $1::int IS NULL OR category = $1
            ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(executor)
    .await
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("france"), "france");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("snake_case"), "snake\\_case");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
        assert_eq!(escape_like(""), "");
    }
}
