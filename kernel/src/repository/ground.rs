use crate::model::{
    ground::{
        event::{CreateGround, UpdateGround},
        Ground,
    },
    id::{GroundId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait GroundRepository: Send + Sync {
    async fn create(&self, event: CreateGround) -> AppResult<Ground>;
    // available = true のグラウンドのみ
    async fn find_available(&self) -> AppResult<Vec<Ground>>;
    // 空き状況にかかわらずオーナーの全グラウンド
    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Ground>>;
    async fn find_by_id(&self, ground_id: GroundId) -> AppResult<Option<Ground>>;
    // オーナー以外が更新しようとした場合は ForbiddenOperation
    async fn update(&self, event: UpdateGround) -> AppResult<Ground>;
}
