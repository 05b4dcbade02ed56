use crate::database::{
    model::{
        booking::{BookingRow, BookingStateRow, SELECT_BOOKING},
        ground::GroundAvailabilityRow,
    },
    set_transaction_serializable, ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, DecideBooking},
        workflow::{self, BookingState, Decision, Transition},
        Booking, BookingStatus,
    },
    id::{BookingId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        // オーナーによる予約は、グラウンドの状態にかかわらず拒否する
        workflow::ensure_can_request(event.requester_role)?;

        let mut tx = self.db.begin().await?;
        set_transaction_serializable(&mut tx).await?;

        // 事前のチェックとして、以下を調べる。
        // - 指定のグラウンド ID をもつグラウンドが存在するか
        // - 存在した場合、available = true か
        //
        // 予約リクエストの段階では available を変更しないので、
        // 同じグラウンドへの pending な予約は複数作られうる
        let ground = {
            let ground = sqlx::query_as::<_, GroundAvailabilityRow>(
                r#"
                    SELECT ground_id, owner_id, price_amount, available
                    FROM grounds
                    WHERE ground_id = $1
                "#,
            )
            .bind(event.ground_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let Some(ground) = ground else {
                return Err(AppError::EntityNotFound(format!(
                    "グラウンド（{}）が見つかりませんでした。",
                    event.ground_id
                )));
            };
            workflow::ensure_bookable(ground.ground_id, ground.available)?;
            ground
        };

        let booking_id = BookingId::new();
        let amount = event.amount.unwrap_or(ground.price_amount);
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, ground_id, renter_id, owner_id, amount,
                slot_from, slot_to, payment_proof, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(booking_id)
        .bind(ground.ground_id)
        .bind(event.requested_by)
        .bind(ground.owner_id)
        .bind(amount)
        .bind(event.slot.from)
        .bind(event.slot.to)
        .bind(&event.payment_proof)
        .bind(BookingStatus::Pending.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            booking.id = %booking_id,
            ground.id = %ground.ground_id,
            renter.id = %event.requested_by,
            amount,
            "booking requested"
        );

        Ok(booking_id)
    }

    async fn confirm(&self, event: DecideBooking) -> AppResult<()> {
        self.apply_decision(Decision::Confirm, event).await
    }

    async fn reject(&self, event: DecideBooking) -> AppResult<()> {
        self.apply_decision(Decision::Reject, event).await
    }

    async fn find_owner_queue(&self, owner_id: UserId) -> AppResult<Vec<Booking>> {
        // 承認済みのものはオーナーの対応待ち一覧から外す
        let sql = format!(
            "{SELECT_BOOKING} WHERE b.owner_id = $1 AND b.status <> $2 ORDER BY b.seq ASC"
        );
        let rows = sqlx::query_as::<_, BookingRow>(&sql)
            .bind(owner_id)
            .bind(BookingStatus::Confirmed.as_ref())
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_by_renter(&self, renter_id: UserId) -> AppResult<Vec<Booking>> {
        let sql = format!("{SELECT_BOOKING} WHERE b.renter_id = $1 ORDER BY b.seq ASC");
        let rows = sqlx::query_as::<_, BookingRow>(&sql)
            .bind(renter_id)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let sql = format!("{SELECT_BOOKING} WHERE b.booking_id = $1");
        sqlx::query_as::<_, BookingRow>(&sql)
            .bind(booking_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?
            .map(Booking::try_from)
            .transpose()
    }
}

impl BookingRepositoryImpl {
    // 予約ステータスの更新とグラウンドの available 更新は
    // 同じトランザクションで行い、片方だけが反映される状態を作らない
    async fn apply_decision(&self, decision: Decision, event: DecideBooking) -> AppResult<()> {
        workflow::ensure_owner_role(event.requester_role)?;

        let mut tx = self.db.begin().await?;
        set_transaction_serializable(&mut tx).await?;

        let transition: Transition = {
            let row = sqlx::query_as::<_, BookingStateRow>(
                r#"
                    SELECT booking_id, ground_id, owner_id, status
                    FROM bookings
                    WHERE booking_id = $1
                    FOR UPDATE
                "#,
            )
            .bind(event.booking_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let Some(row) = row else {
                return Err(AppError::EntityNotFound(format!(
                    "予約（{}）が見つかりませんでした。",
                    event.booking_id
                )));
            };
            let state = BookingState::try_from(row)?;
            workflow::decide(decision, event.requested_by, event.requester_role, &state)?
        };

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = $2
                WHERE booking_id = $1 AND status = $3
            "#,
        )
        .bind(transition.booking_id)
        .bind(transition.status.as_ref())
        .bind(BookingStatus::Pending.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been updated".into(),
            ));
        }

        let res = sqlx::query(
            r#"
                UPDATE grounds
                SET available = $2
                WHERE ground_id = $1
            "#,
        )
        .bind(transition.ground_id)
        .bind(transition.ground_available)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No ground record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            booking.id = %transition.booking_id,
            ground.id = %transition.ground_id,
            booking.status = %transition.status,
            ground.available = transition.ground_available,
            "booking decided"
        );

        Ok(())
    }
}
