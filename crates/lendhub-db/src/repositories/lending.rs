//! PostgreSQL implementation of LendingRepository
//!
//! Approval and rejection are single conditional updates, so two concurrent
//! decisions on the same proposal can never both land.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use lendhub_core::entities::{Lending, LendingWithBorrower};
use lendhub_core::error::DomainError;
use lendhub_core::traits::{LendingRepository, RepoResult};

use crate::models::{LendingModel, LendingWithBorrowerModel};

use super::error::{expect_row, map_db_error, map_foreign_key_violation};

const LENDING_COLUMNS: &str = r"
    l.id, l.user_id, l.amount, l.interest_rate, l.tenor, l.age, l.gender, l.income,
    l.last_education, l.marital_status, l.number_of_children, l.home_ownership,
    l.kk_url, l.ktp_url, l.status, l.is_approved, l.is_rejected, l.is_paid,
    l.payment_token, l.payment_url, l.created_at, l.updated_at
";

/// PostgreSQL implementation of LendingRepository
#[derive(Clone)]
pub struct PgLendingRepository {
    pool: PgPool,
}

impl PgLendingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn update_status(&self, id: Uuid, status: &str, paid: bool) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE lendings
            SET status = $2, is_paid = is_paid OR $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status)
        .bind(paid)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl LendingRepository for PgLendingRepository {
    #[instrument(skip(self), fields(id = %lending.id, user_id = %lending.user_id))]
    async fn create(&self, lending: &Lending) -> RepoResult<()> {
        let profile = &lending.profile;
        sqlx::query(
            r"
            INSERT INTO lendings (
                id, user_id, amount, interest_rate, tenor, age, gender, income,
                last_education, marital_status, number_of_children, home_ownership,
                kk_url, ktp_url, status, is_approved, is_rejected, is_paid,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                    FALSE, FALSE, FALSE, $16, $17)
            ",
        )
        .bind(lending.id)
        .bind(lending.user_id)
        .bind(lending.amount)
        .bind(lending.interest_rate)
        .bind(lending.tenor)
        .bind(profile.age)
        .bind(profile.gender.as_flag())
        .bind(profile.income)
        .bind(profile.last_education.code())
        .bind(profile.marital_status.as_flag())
        .bind(profile.number_of_children)
        .bind(profile.home_ownership.as_flag())
        .bind(&lending.kk_url)
        .bind(&lending.ktp_url)
        .bind(lending.status.as_str())
        .bind(lending.created_at)
        .bind(lending.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::DanglingReference("user")))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Lending>> {
        let sql = format!("SELECT {LENDING_COLUMNS} FROM lendings l WHERE l.id = $1");
        let row = sqlx::query_as::<_, LendingModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(Lending::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Lending>> {
        let sql = format!(
            "SELECT {LENDING_COLUMNS} FROM lendings l WHERE l.user_id = $1 ORDER BY l.created_at DESC"
        );
        let rows = sqlx::query_as::<_, LendingModel>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(Lending::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<LendingWithBorrower>> {
        let sql = format!(
            r"
            SELECT {LENDING_COLUMNS}, u.username
            FROM lendings l
            JOIN users u ON u.id = l.user_id
            ORDER BY l.created_at DESC
            "
        );
        let rows = sqlx::query_as::<_, LendingWithBorrowerModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(LendingWithBorrower::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn approve(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE lendings
            SET status = 'approved', is_approved = TRUE, updated_at = NOW()
            WHERE id = $1 AND is_approved = FALSE AND is_rejected = FALSE
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        expect_row(result, "lending")
    }

    #[instrument(skip(self))]
    async fn reject(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE lendings
            SET status = 'rejected', is_rejected = TRUE, updated_at = NOW()
            WHERE id = $1 AND is_approved = FALSE AND is_rejected = FALSE
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        expect_row(result, "lending")
    }

    #[instrument(skip(self, token, url))]
    async fn set_payment(&self, id: Uuid, token: &str, url: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE lendings
            SET payment_token = $2, payment_url = $3, updated_at = NOW()
            WHERE id = $1 AND is_approved = TRUE AND payment_token IS NULL
            ",
        )
        .bind(id)
        .bind(token)
        .bind(url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotPayable);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_paid(&self, id: Uuid, status: &str) -> RepoResult<u64> {
        self.update_status(id, status, true).await
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: Uuid, status: &str) -> RepoResult<u64> {
        self.update_status(id, status, false).await
    }

    #[instrument(skip(self))]
    async fn count_awaiting_approval(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM lendings WHERE is_approved = FALSE AND is_rejected = FALSE",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
