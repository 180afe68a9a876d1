use crate::model::{id::UserId, ticket::TicketStatus};
use crate::repository::{enrollment::EnrollmentRepository, ticket::TicketRepository};
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// 予約経路の資格判定。
///
/// 参加登録 -> チケット -> 券種の順に検査し、最初の不合格で打ち切る。
/// 不合格の理由は呼び出し元へ区別して返さず、すべて Forbidden に畳み込む
/// （ホテル閲覧経路の判定とは意図的に非対称。[`HotelAccess`] を参照）。
#[derive(new, Clone)]
pub struct BookingEligibility {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

impl BookingEligibility {
    pub async fn check(&self, user_id: UserId) -> AppResult<()> {
        let enrollment = self
            .enrollment_repository
            .find_with_address_by_user_id(user_id)
            .await?
            .ok_or_else(|| forbidden(user_id))?;

        let ticket = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.id)
            .await?
            .ok_or_else(|| forbidden(user_id))?;

        if !ticket.ticket_type.includes_hotel
            || ticket.ticket_type.is_remote
            || ticket.status != TicketStatus::Paid
        {
            return Err(forbidden(user_id));
        }

        Ok(())
    }
}

fn forbidden(user_id: UserId) -> AppError {
    AppError::ForbiddenOperation(format!("ユーザー（{user_id}）は部屋を予約できません。"))
}

/// ホテル閲覧経路のチケット判定。
///
/// 予約経路と違い、不合格の種別を呼び出し元へ区別して返す。
/// 未登録・チケットなし・未決済 -> PaymentRequired、
/// 券種がホテル対象外（リモート参加または宿泊なし） -> Unauthorized。
#[derive(new, Clone)]
pub struct HotelAccess {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

impl HotelAccess {
    pub async fn check(&self, user_id: UserId) -> AppResult<()> {
        let enrollment = self
            .enrollment_repository
            .find_with_address_by_user_id(user_id)
            .await?
            .ok_or_else(|| payment_required(user_id))?;

        let ticket = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.id)
            .await?
            .ok_or_else(|| payment_required(user_id))?;

        if ticket.ticket_type.is_remote || !ticket.ticket_type.includes_hotel {
            return Err(AppError::UnauthorizedTicket(format!(
                "ユーザー（{user_id}）のチケットは宿泊対象外です。"
            )));
        }

        if ticket.status != TicketStatus::Paid {
            return Err(payment_required(user_id));
        }

        Ok(())
    }
}

fn payment_required(user_id: UserId) -> AppError {
    AppError::PaymentRequiredError(format!(
        "ユーザー（{user_id}）の決済済みチケットが見つかりませんでした。"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ticket::TicketStatus;
    use crate::service::testing::InMemoryStore;

    fn eligibility(store: &Arc<InMemoryStore>) -> BookingEligibility {
        BookingEligibility::new(store.clone(), store.clone())
    }

    fn hotel_access(store: &Arc<InMemoryStore>) -> HotelAccess {
        HotelAccess::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn booking_eligibility_fails_without_enrollment() {
        let store = InMemoryStore::shared();
        let user_id = crate::model::id::UserId::new();

        let res = eligibility(&store).check(user_id).await;

        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
    }

    #[tokio::test]
    async fn booking_eligibility_fails_without_ticket() {
        let store = InMemoryStore::shared();
        let user_id = crate::model::id::UserId::new();
        store.add_enrollment(user_id);

        let res = eligibility(&store).check(user_id).await;

        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
    }

    #[tokio::test]
    async fn booking_eligibility_collapses_every_gate_to_forbidden() {
        // ホテルなし、リモート、未決済、のどれでも区別なく Forbidden
        let cases = [
            (false, false, TicketStatus::Paid),
            (true, true, TicketStatus::Paid),
            (true, false, TicketStatus::Reserved),
        ];
        for (includes_hotel, is_remote, status) in cases {
            let store = InMemoryStore::shared();
            let user_id = crate::model::id::UserId::new();
            let enrollment_id = store.add_enrollment(user_id);
            store.add_ticket(enrollment_id, status, is_remote, includes_hotel);

            let res = eligibility(&store).check(user_id).await;

            assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
        }
    }

    #[tokio::test]
    async fn booking_eligibility_passes_with_paid_in_person_hotel_ticket() {
        let store = InMemoryStore::shared();
        let user_id = crate::model::id::UserId::new();
        let enrollment_id = store.add_enrollment(user_id);
        store.add_ticket(enrollment_id, TicketStatus::Paid, false, true);

        assert!(eligibility(&store).check(user_id).await.is_ok());
    }

    #[tokio::test]
    async fn eligibility_is_monotonic_until_ticket_is_paid() {
        let store = InMemoryStore::shared();
        let user_id = crate::model::id::UserId::new();
        let enrollment_id = store.add_enrollment(user_id);
        let ticket_id = store.add_ticket(enrollment_id, TicketStatus::Reserved, false, true);

        let checker = eligibility(&store);
        for _ in 0..3 {
            assert!(matches!(
                checker.check(user_id).await,
                Err(AppError::ForbiddenOperation(_))
            ));
        }

        // 外部の決済フローが PAID に遷移させたあとだけ通る
        store.set_ticket_status(ticket_id, TicketStatus::Paid);
        assert!(checker.check(user_id).await.is_ok());
    }

    #[tokio::test]
    async fn hotel_access_requires_payment_when_enrollment_or_ticket_is_missing() {
        let store = InMemoryStore::shared();
        let user_id = crate::model::id::UserId::new();

        let res = hotel_access(&store).check(user_id).await;
        assert!(matches!(res, Err(AppError::PaymentRequiredError(_))));

        store.add_enrollment(user_id);
        let res = hotel_access(&store).check(user_id).await;
        assert!(matches!(res, Err(AppError::PaymentRequiredError(_))));
    }

    #[tokio::test]
    async fn hotel_access_rejects_wrong_ticket_category_as_unauthorized() {
        for (includes_hotel, is_remote) in [(false, false), (true, true)] {
            let store = InMemoryStore::shared();
            let user_id = crate::model::id::UserId::new();
            let enrollment_id = store.add_enrollment(user_id);
            store.add_ticket(enrollment_id, TicketStatus::Paid, is_remote, includes_hotel);

            let res = hotel_access(&store).check(user_id).await;

            assert!(matches!(res, Err(AppError::UnauthorizedTicket(_))));
        }
    }

    #[tokio::test]
    async fn hotel_access_requires_payment_for_unpaid_ticket_of_right_category() {
        let store = InMemoryStore::shared();
        let user_id = crate::model::id::UserId::new();
        let enrollment_id = store.add_enrollment(user_id);
        store.add_ticket(enrollment_id, TicketStatus::Reserved, false, true);

        let res = hotel_access(&store).check(user_id).await;

        assert!(matches!(res, Err(AppError::PaymentRequiredError(_))));
    }

    #[tokio::test]
    async fn hotel_access_passes_with_paid_in_person_hotel_ticket() {
        let store = InMemoryStore::shared();
        let user_id = crate::model::id::UserId::new();
        let enrollment_id = store.add_enrollment(user_id);
        store.add_ticket(enrollment_id, TicketStatus::Paid, false, true);

        assert!(hotel_access(&store).check(user_id).await.is_ok());
    }
}
