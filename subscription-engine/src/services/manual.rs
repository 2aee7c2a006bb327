//! Admin-created subscriptions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Plan, Subscription, SubscriptionCreate, SubscriptionStatus, WeekType};
use std::sync::Arc;

use crate::db::SubscriptionRepository;
use crate::pricing::{ManualAddOnLine, ManualMealLine, ManualTotals, calculate_manual_totals};
use crate::schedule::compute_end_date;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualSubscriptionRequest {
    pub user_id: String,
    pub address_id: String,
    pub meals: Vec<ManualMealLine>,
    #[serde(default)]
    pub add_ons: Vec<ManualAddOnLine>,
    pub plan: Plan,
    #[serde(default)]
    pub week_type: WeekType,
    pub start_date: NaiveDate,
    pub delivery_time: Option<String>,
    pub special_instructions: Option<String>,
}

#[derive(Clone)]
pub struct ManualSubscriptionService {
    subscriptions: Arc<dyn SubscriptionRepository>,
    delivery_fee: f64,
}

impl ManualSubscriptionService {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>, delivery_fee: f64) -> Self {
        Self {
            subscriptions,
            delivery_fee,
        }
    }

    /// Totals shown on the admin form before creation
    pub fn preview(&self, request: &ManualSubscriptionRequest) -> ManualTotals {
        calculate_manual_totals(
            &request.meals,
            &request.add_ons,
            Some(&request.plan),
            self.delivery_fee,
        )
    }

    /// Create a paid, active subscription on behalf of a customer
    ///
    /// The first meal line becomes the subscription's meal.
    pub async fn create(
        &self,
        request: ManualSubscriptionRequest,
    ) -> AppResult<(Subscription, ManualTotals)> {
        if request.user_id.trim().is_empty() {
            return Err(AppError::required_field("userId"));
        }
        let Some(first_meal) = request.meals.first() else {
            return Err(AppError::required_field("meals"));
        };
        if request.plan.duration < 1 {
            return Err(AppError::new(ErrorCode::InvalidDuration)
                .with_detail("planId", request.plan.id.clone())
                .with_detail("duration", request.plan.duration));
        }

        let totals = self.preview(&request);
        let end_date = compute_end_date(request.start_date, request.plan.duration, request.week_type);
        let exclusion = request.week_type.weekend_exclusion();

        let create = SubscriptionCreate {
            user_id: request.user_id.clone(),
            meal_id: first_meal.meal.id.clone(),
            plan_id: request.plan.id.clone(),
            start_date: request.start_date,
            end_date,
            delivery_time: request.delivery_time,
            week_type: request.week_type,
            weekend_exclusion: exclusion,
            exclude_weekends: exclusion.exclude_weekends(),
            address_id: request.address_id,
            add_ons: request.add_ons.iter().map(|l| l.add_on.id.clone()).collect(),
            total_amount: totals.total,
            paid_amount: totals.total,
            total_deliveries: request.plan.duration,
            remaining_deliveries: request.plan.duration,
            status: SubscriptionStatus::Active,
            special_instructions: request.special_instructions,
        };

        let sub = self.subscriptions.create(create).await?;
        tracing::info!(
            subscription_id = %sub.id,
            user_id = %sub.user_id,
            total = totals.total,
            "Manual subscription created"
        );
        Ok((sub, totals))
    }
}
