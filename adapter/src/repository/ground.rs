use crate::database::{
    model::ground::{GroundRow, SELECT_GROUND},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    ground::{
        ensure_owner,
        event::{CreateGround, UpdateGround},
        normalize_tags, Ground, DEFAULT_CURRENCY,
    },
    id::{GroundId, UserId},
};
use kernel::repository::ground::GroundRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct GroundRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl GroundRepository for GroundRepositoryImpl {
    async fn create(&self, event: CreateGround) -> AppResult<Ground> {
        let ground_id = GroundId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO grounds
                (ground_id, owner_id, title, description, thumbnail, images,
                price_amount, price_currency, price_negotiable,
                sport_tags, facility_tags, address, lat, lng, available)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, TRUE)
            "#,
        )
        .bind(ground_id)
        .bind(event.owner_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.thumbnail)
        .bind(&event.images)
        .bind(event.price_amount)
        .bind(DEFAULT_CURRENCY)
        .bind(event.negotiable)
        .bind(normalize_tags(&event.sport_tags))
        .bind(normalize_tags(&event.facility_tags))
        .bind(&event.address)
        .bind(event.lat)
        .bind(event.lng)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No ground record has been created".into(),
            ));
        }

        tracing::info!(ground.id = %ground_id, owner.id = %event.owner_id, "ground listed");

        self.find_by_id(ground_id).await?.ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "グラウンド（{ground_id}）が見つかりませんでした。"
            ))
        })
    }

    async fn find_available(&self) -> AppResult<Vec<Ground>> {
        let sql = format!("{SELECT_GROUND} WHERE g.available = TRUE ORDER BY g.created_at DESC");
        self.fetch_grounds(sqlx::query_as::<_, GroundRow>(&sql)).await
    }

    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Ground>> {
        let sql = format!("{SELECT_GROUND} WHERE g.owner_id = $1 ORDER BY g.created_at DESC");
        self.fetch_grounds(sqlx::query_as::<_, GroundRow>(&sql).bind(owner_id))
            .await
    }

    async fn find_by_id(&self, ground_id: GroundId) -> AppResult<Option<Ground>> {
        let sql = format!("{SELECT_GROUND} WHERE g.ground_id = $1");
        let row = sqlx::query_as::<_, GroundRow>(&sql)
            .bind(ground_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Ground::from))
    }

    async fn update(&self, event: UpdateGround) -> AppResult<Ground> {
        let mut tx = self.db.begin().await?;

        // 所有者の確認と更新を同じトランザクションで行う
        {
            let owner_id: Option<UserId> = sqlx::query_scalar(
                r#"
                    SELECT owner_id FROM grounds
                    WHERE ground_id = $1
                    FOR UPDATE
                "#,
            )
            .bind(event.ground_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let Some(owner_id) = owner_id else {
                return Err(AppError::EntityNotFound(format!(
                    "グラウンド（{}）が見つかりませんでした。",
                    event.ground_id
                )));
            };
            ensure_owner(owner_id, event.requested_user)?;
        }

        let res = sqlx::query(
            r#"
                UPDATE grounds
                SET
                    title = COALESCE($2, title),
                    description = COALESCE($3, description),
                    thumbnail = COALESCE($4, thumbnail),
                    images = COALESCE($5, images),
                    price_amount = COALESCE($6, price_amount),
                    price_negotiable = COALESCE($7, price_negotiable),
                    sport_tags = COALESCE($8, sport_tags),
                    facility_tags = COALESCE($9, facility_tags),
                    address = COALESCE($10, address),
                    lat = COALESCE($11, lat),
                    lng = COALESCE($12, lng),
                    available = COALESCE($13, available)
                WHERE ground_id = $1
            "#,
        )
        .bind(event.ground_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.thumbnail)
        .bind(&event.images)
        .bind(event.price_amount)
        .bind(event.negotiable)
        .bind(event.sport_tags.as_ref().map(normalize_tags))
        .bind(event.facility_tags.as_ref().map(normalize_tags))
        .bind(&event.address)
        .bind(event.lat)
        .bind(event.lng)
        .bind(event.available)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No ground record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        self.find_by_id(event.ground_id).await?.ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "グラウンド（{}）が見つかりませんでした。",
                event.ground_id
            ))
        })
    }
}

impl GroundRepositoryImpl {
    async fn fetch_grounds<'q>(
        &self,
        query: sqlx::query::QueryAs<'q, sqlx::Postgres, GroundRow, sqlx::postgres::PgArguments>,
    ) -> AppResult<Vec<Ground>> {
        query
            .fetch_all(self.db.inner_ref())
            .await
            .map(|rows| rows.into_iter().map(Ground::from).collect())
            .map_err(AppError::SpecificOperationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::{
        model::{role::Role, user::event::CreateUser},
        repository::user::UserRepository,
    };

    async fn create_owner(db: ConnectionPool, email: &str) -> anyhow::Result<UserId> {
        let user = UserRepositoryImpl::new(db)
            .create(CreateUser {
                user_name: "Owner".into(),
                email: email.into(),
                phone: None,
                password: "password".into(),
                role: Role::Owner,
                upi_id: Some("owner@upi".into()),
            })
            .await?;
        Ok(user.user_id)
    }

    fn new_ground(owner_id: UserId) -> CreateGround {
        CreateGround {
            owner_id,
            title: "Green Turf".into(),
            description: "5-a-side turf".into(),
            thumbnail: None,
            images: vec![],
            price_amount: 500,
            negotiable: false,
            sport_tags: vec!["football".into(), "football".into(), " ".into()],
            facility_tags: vec!["floodlights".into()],
            address: "MG Road".into(),
            lat: Some(12.97),
            lng: Some(77.59),
        }
    }

    #[sqlx::test]
    #[ignore = "requires PostgreSQL via DATABASE_URL"]
    async fn create_and_list_grounds(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let owner_id = create_owner(db.clone(), "owner@example.com").await?;
        let repo = GroundRepositoryImpl::new(db);

        let ground = repo.create(new_ground(owner_id)).await?;
        assert!(ground.available);
        assert_eq!(ground.price.currency, "INR");
        assert_eq!(ground.sport_tags, vec!["football".to_string()]);
        assert_eq!(ground.owner.upi_id.as_deref(), Some("owner@upi"));

        assert_eq!(repo.find_available().await?.len(), 1);
        assert_eq!(repo.find_by_owner(owner_id).await?.len(), 1);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires PostgreSQL via DATABASE_URL"]
    async fn only_the_owner_can_update(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let owner_id = create_owner(db.clone(), "owner@example.com").await?;
        let other_id = create_owner(db.clone(), "other@example.com").await?;
        let repo = GroundRepositoryImpl::new(db);
        let ground = repo.create(new_ground(owner_id)).await?;

        let res = repo
            .update(UpdateGround {
                ground_id: ground.ground_id,
                requested_user: other_id,
                title: Some("Hijacked".into()),
                ..Default::default()
            })
            .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));

        let updated = repo
            .update(UpdateGround {
                ground_id: ground.ground_id,
                requested_user: owner_id,
                available: Some(false),
                ..Default::default()
            })
            .await?;
        assert!(!updated.available);
        assert_eq!(updated.title, "Green Turf");
        assert!(repo.find_available().await?.is_empty());
        assert_eq!(repo.find_by_owner(owner_id).await?.len(), 1);
        Ok(())
    }
}
