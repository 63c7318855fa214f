use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DrinkDto {
    pub id: i32,
    pub name: String,
    /// Caffeine in milligrams per base serving
    pub caffeine_mg: i32,
    pub base_size_ml: i32,
    /// Owning user for custom drinks; `None` for global drinks
    pub created_by_user_id: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConsumptionEntryDto {
    pub id: i32,
    pub drink_id: i32,
    pub quantity: i32,
    pub caffeine_mg: i32,
    pub consumed_at: NaiveDateTime,
}

/// Daily caffeine status for a single UTC calendar date.
///
/// `limit_mg` and `remaining_mg` are `None` when no limit is configured,
/// a valid "no limit set" state rather than an error. `remaining_mg` goes negative
/// when the limit is exceeded to signal the overage magnitude.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DailyStatusDto {
    pub date: NaiveDate,
    pub total_mg: i64,
    pub limit_mg: Option<i32>,
    pub remaining_mg: Option<i64>,
    pub over_limit: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DailyLimitDto {
    pub limit_mg: i32,
    pub effective_from: NaiveDate,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LimitStatusDto {
    pub date: NaiveDate,
    /// Limit in effect for `date`; `None` when no limit is configured
    pub limit_mg: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LogConsumptionDto {
    pub drink_id: i32,
    pub quantity: i32,
    /// Defaults to the current time when omitted
    pub consumed_at: Option<NaiveDateTime>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SetLimitDto {
    pub limit_mg: i32,
    /// Defaults to today (UTC) when omitted
    pub effective_from: Option<NaiveDate>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateDrinkDto {
    pub name: String,
    pub caffeine_mg: i32,
    pub base_size_ml: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub drink_id: i32,
}
