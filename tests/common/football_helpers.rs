use sqlx::PgPool;

pub struct NewMatch<'a> {
    pub championship_id: i32,
    pub stadium_id: Option<i32>,
    pub principal_id: i32,
    pub visitor_id: i32,
    /// Literal `TIMESTAMP` expression, e.g. `NOW() - INTERVAL '2 days'`.
    pub date_sql: &'a str,
    pub scores: (i32, i32, i32, i32),
}

pub async fn insert_team(pool: &PgPool, full_name: &str, name: &str, surname: &str, acronym: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO teams (full_name, name, surname, acronym) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(full_name)
    .bind(name)
    .bind(surname)
    .bind(acronym)
    .fetch_one(pool)
    .await
    .expect("Failed to insert team")
}

pub async fn insert_championship(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>("INSERT INTO championships (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("Failed to insert championship")
}

pub async fn insert_stadium(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>("INSERT INTO stadiums (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("Failed to insert stadium")
}

pub async fn insert_match(pool: &PgPool, new_match: NewMatch<'_>) -> i32 {
    // date_sql is test-controlled, everything else is bound
    let query = format!(
        r#"
        INSERT INTO matches (
            id_championship, id_stadium, date,
            id_team_principal, scoreboard_principal, scoreboard_principal_penalties,
            id_team_visitor, scoreboard_visitor, scoreboard_visitor_penalties
        )
        VALUES ($1, $2, {}, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
        new_match.date_sql
    );
    let (principal, principal_penalties, visitor, visitor_penalties) = new_match.scores;

    sqlx::query_scalar::<_, i32>(&query)
        .bind(new_match.championship_id)
        .bind(new_match.stadium_id)
        .bind(new_match.principal_id)
        .bind(principal)
        .bind(principal_penalties)
        .bind(new_match.visitor_id)
        .bind(visitor)
        .bind(visitor_penalties)
        .fetch_one(pool)
        .await
        .expect("Failed to insert match")
}
