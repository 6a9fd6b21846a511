// ---------------------------------------------------------------------------
// repository.rs — data access for the agents table
// ---------------------------------------------------------------------------

use sqlx::PgPool;

use crate::models::{Agent, NewAgent, SearchFilters};

/// All agent persistence goes through here; handlers never touch SQL.
#[derive(Clone)]
pub struct AgentRepository {
    pool: PgPool,
}

impl AgentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an agent and return the stored row, id and timestamp included.
    pub async fn create(&self, agent: &NewAgent) -> Result<Agent, sqlx::Error> {
        sqlx::query_as::<_, Agent>(
            r#"
            INSERT INTO agents (name, photo_url, specialization, location_city, location_state, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&agent.name)
        .bind(&agent.photo_url)
        .bind(&agent.specialization)
        .bind(&agent.location_city)
        .bind(&agent.location_state)
        .bind(&agent.description)
        .fetch_one(&self.pool)
        .await
    }

    /// Every agent, newest first.
    pub async fn list_all(&self) -> Result<Vec<Agent>, sqlx::Error> {
        sqlx::query_as::<_, Agent>("SELECT * FROM agents ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
    }

    /// Agents matching every present filter, newest first.
    pub async fn search(&self, filters: &SearchFilters) -> Result<Vec<Agent>, sqlx::Error> {
        let (sql, values) = build_search_query(filters);
        let mut query = sqlx::query_as::<_, Agent>(&sql);
        for value in &values {
            query = query.bind(value);
        }
        query.fetch_all(&self.pool).await
    }
}

/// Assemble the search statement from whichever filters are present.
///
/// Filter values travel as bind parameters, never by string interpolation,
/// so user input cannot alter the statement shape. Name matches are
/// substring and case-insensitive (`ILIKE` with wrapping wildcards); city
/// and specialization match whole values case-insensitively.
fn build_search_query(filters: &SearchFilters) -> (String, Vec<String>) {
    let mut sql = String::from("SELECT * FROM agents");
    let mut clauses: Vec<String> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    if let Some(name) = &filters.name {
        values.push(format!("%{name}%"));
        clauses.push(format!("name ILIKE ${}", values.len()));
    }
    if let Some(city) = &filters.location_city {
        values.push(city.clone());
        clauses.push(format!("LOWER(location_city) = LOWER(${})", values.len()));
    }
    if let Some(specialization) = &filters.specialization {
        values.push(specialization.clone());
        clauses.push(format!("LOWER(specialization) = LOWER(${})", values.len()));
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY created_at DESC");

    (sql, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_selects_everything() {
        let (sql, values) = build_search_query(&SearchFilters::default());
        assert_eq!(sql, "SELECT * FROM agents ORDER BY created_at DESC");
        assert!(values.is_empty());
    }

    #[test]
    fn name_filter_wraps_in_wildcards() {
        let filters = SearchFilters {
            name: Some("sarah".to_string()),
            ..SearchFilters::default()
        };
        let (sql, values) = build_search_query(&filters);
        assert_eq!(
            sql,
            "SELECT * FROM agents WHERE name ILIKE $1 ORDER BY created_at DESC"
        );
        assert_eq!(values, vec!["%sarah%"]);
    }

    #[test]
    fn city_filter_compares_whole_value_case_insensitively() {
        let filters = SearchFilters {
            location_city: Some("New York".to_string()),
            ..SearchFilters::default()
        };
        let (sql, values) = build_search_query(&filters);
        assert_eq!(
            sql,
            "SELECT * FROM agents WHERE LOWER(location_city) = LOWER($1) ORDER BY created_at DESC"
        );
        assert_eq!(values, vec!["New York"]);
    }

    #[test]
    fn all_filters_join_with_and_in_declaration_order() {
        let filters = SearchFilters {
            name: Some("a".to_string()),
            location_city: Some("Austin".to_string()),
            specialization: Some("Commercial".to_string()),
        };
        let (sql, values) = build_search_query(&filters);
        assert_eq!(
            sql,
            "SELECT * FROM agents WHERE name ILIKE $1 AND LOWER(location_city) = LOWER($2) \
             AND LOWER(specialization) = LOWER($3) ORDER BY created_at DESC"
        );
        assert_eq!(values, vec!["%a%", "Austin", "Commercial"]);
    }

    #[test]
    fn placeholders_number_by_position_when_filters_are_skipped() {
        let filters = SearchFilters {
            name: None,
            location_city: Some("Denver".to_string()),
            specialization: Some("Residential".to_string()),
        };
        let (sql, values) = build_search_query(&filters);
        assert_eq!(
            sql,
            "SELECT * FROM agents WHERE LOWER(location_city) = LOWER($1) \
             AND LOWER(specialization) = LOWER($2) ORDER BY created_at DESC"
        );
        assert_eq!(values, vec!["Denver", "Residential"]);
    }

    #[test]
    fn hostile_input_stays_in_bind_values() {
        let filters = SearchFilters {
            name: Some("'; DROP TABLE agents; --".to_string()),
            ..SearchFilters::default()
        };
        let (sql, values) = build_search_query(&filters);
        assert!(!sql.contains("DROP"));
        assert_eq!(values, vec!["%'; DROP TABLE agents; --%"]);
    }
}
