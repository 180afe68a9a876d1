use crate::database::{model::enrollment::EnrollmentRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{enrollment::Enrollment, id::UserId};
use kernel::repository::enrollment::EnrollmentRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct EnrollmentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryImpl {
    async fn find_with_address_by_user_id(
        &self,
        user_id: UserId,
    ) -> AppResult<Option<Enrollment>> {
        let row: Option<EnrollmentRow> = sqlx::query_as(
            r#"
                SELECT
                    e.id AS enrollment_id,
                    e.user_id,
                    e.name,
                    e.cpf,
                    e.phone,
                    a.cep,
                    a.street,
                    a.city,
                    a.state,
                    a.number,
                    a.neighborhood,
                    a.address_detail
                FROM enrollments e
                LEFT JOIN addresses a ON a.enrollment_id = e.id
                WHERE e.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Enrollment::from))
    }
}
