use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::ConceptRow;

const CONCEPT_COLUMNS: &str = "id, description, terms, preferred_term, status";

/// Row-level access to the `concepts` table. Every method is one statement.
#[derive(Clone)]
pub struct ConceptRepository {
    pool: SqlitePool,
}

impl ConceptRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All rows in storage order
    pub async fn select_any(&self) -> Result<Vec<ConceptRow>, DatabaseError> {
        let sql = format!("SELECT {} FROM concepts ORDER BY id", CONCEPT_COLUMNS);
        let rows = sqlx::query_as::<_, ConceptRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn select_one(&self, id: i64) -> Result<Option<ConceptRow>, DatabaseError> {
        let sql = format!("SELECT {} FROM concepts WHERE id = ?", CONCEPT_COLUMNS);
        let row = sqlx::query_as::<_, ConceptRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn select_404(&self, id: i64) -> Result<ConceptRow, DatabaseError> {
        self.select_one(id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("Concept {} not found", id)))
    }

    pub async fn insert(
        &self,
        description: &str,
        terms: &[String],
        preferred_term: Option<&str>,
        status: &str,
    ) -> Result<ConceptRow, DatabaseError> {
        let sql = format!(
            "INSERT INTO concepts (description, terms, preferred_term, status) VALUES (?, ?, ?, ?) RETURNING {}",
            CONCEPT_COLUMNS
        );
        let row = sqlx::query_as::<_, ConceptRow>(&sql)
            .bind(description)
            .bind(Json(terms))
            .bind(preferred_term)
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Set the preferred term only while it is still one of the stored terms.
    ///
    /// Returns the number of rows changed (0 when the concept is missing or the
    /// term is no longer a member).
    pub async fn update_preferred_term(
        &self,
        id: i64,
        preferred_term: &str,
        status: &str,
    ) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE concepts SET preferred_term = ?, status = ? \
             WHERE id = ? AND EXISTS (SELECT 1 FROM json_each(concepts.terms) WHERE json_each.value = ?)",
        )
        .bind(preferred_term)
        .bind(status)
        .bind(id)
        .bind(preferred_term)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn update_terms(&self, id: i64, terms: &[String]) -> Result<u64, DatabaseError> {
        let result = sqlx::query("UPDATE concepts SET terms = ? WHERE id = ?")
            .bind(Json(terms))
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Overwrite the stored status of the first concept (lowest id) having a
    /// term that contains `name`. Returns the id that was updated.
    pub async fn update_status_by_term_substring(
        &self,
        name: &str,
        status: &str,
    ) -> Result<Option<i64>, DatabaseError> {
        let updated: Option<(i64,)> = sqlx::query_as(
            "UPDATE concepts SET status = ? WHERE id = ( \
                 SELECT c.id FROM concepts c \
                 WHERE EXISTS (SELECT 1 FROM json_each(c.terms) j WHERE instr(j.value, ?) > 0) \
                 ORDER BY c.id LIMIT 1 \
             ) RETURNING id",
        )
        .bind(status)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated.map(|(id,)| id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestContext;

    fn terms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_keeps_declared_fields() {
        let ctx = TestContext::new().await.unwrap();
        let repo = ctx.repository();

        let first = repo.insert("desc", &terms(&["a", "b"]), Some("z"), "made up").await.unwrap();
        let second = repo.insert("other", &terms(&["c"]), None, "not resolved").await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.terms(), terms(&["a", "b"]).as_slice());
        assert_eq!(first.preferred_term.as_deref(), Some("z"));
        assert_eq!(first.status, "made up");

        let all = repo.select_any().await.unwrap();
        assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn terms_with_commas_round_trip() {
        let ctx = TestContext::new().await.unwrap();
        let repo = ctx.repository();

        let list = terms(&["heart attack, acute", "MI"]);
        let row = repo.insert("desc", &list, None, "not resolved").await.unwrap();
        let fetched = repo.select_404(row.id).await.unwrap();
        assert_eq!(fetched.terms(), list.as_slice());
    }

    #[tokio::test]
    async fn select_404_reports_missing_rows() {
        let ctx = TestContext::new().await.unwrap();
        let err = ctx.repository().select_404(41).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound(_)));
    }

    #[tokio::test]
    async fn preferred_term_update_is_guarded_by_membership() {
        let ctx = TestContext::new().await.unwrap();
        let repo = ctx.repository();
        let row = repo.insert("desc", &terms(&["a", "b"]), None, "not resolved").await.unwrap();

        assert_eq!(repo.update_preferred_term(row.id, "c", "resolved").await.unwrap(), 0);
        assert_eq!(repo.update_preferred_term(row.id, "b", "resolved").await.unwrap(), 1);
        assert_eq!(repo.update_preferred_term(row.id + 100, "b", "resolved").await.unwrap(), 0);

        let fetched = repo.select_404(row.id).await.unwrap();
        assert_eq!(fetched.preferred_term.as_deref(), Some("b"));
        assert_eq!(fetched.status, "resolved");
    }

    #[tokio::test]
    async fn status_update_matches_first_substring_hit() {
        let ctx = TestContext::new().await.unwrap();
        let repo = ctx.repository();
        let first = repo
            .insert("one", &terms(&["first_term", "primary_term"]), None, "not resolved")
            .await
            .unwrap();
        let second = repo
            .insert("two", &terms(&["first_aid"]), None, "not resolved")
            .await
            .unwrap();

        let hit = repo.update_status_by_term_substring("first", "resolved").await.unwrap();
        assert_eq!(hit, Some(first.id));
        assert_eq!(repo.select_404(first.id).await.unwrap().status, "resolved");
        assert_eq!(repo.select_404(second.id).await.unwrap().status, "not resolved");

        let miss = repo.update_status_by_term_substring("absent", "resolved").await.unwrap();
        assert_eq!(miss, None);
    }
}
