//! Offer lookup
//!
//! Resolves a customer-entered promo code to an applicable [`Offer`]. Only
//! offers returned from here should be placed on a draft.

use chrono::{DateTime, Utc};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Offer;
use std::sync::Arc;

use crate::db::OfferRepository;

#[derive(Clone)]
pub struct OfferService {
    repo: Arc<dyn OfferRepository>,
}

impl OfferService {
    pub fn new(repo: Arc<dyn OfferRepository>) -> Self {
        Self { repo }
    }

    /// Resolve a promo code
    ///
    /// Errors:
    /// - `PromoCodeRequired` for a blank code
    /// - `PromoCodeInvalid` when no active offer carries the code
    /// - `PromoCodeExpired` when the offer exists but `now` is outside its window
    pub async fn resolve_promo_code(&self, code: &str, now: DateTime<Utc>) -> AppResult<Offer> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(AppError::new(ErrorCode::PromoCodeRequired));
        }

        let offers = self.repo.find_all().await?;
        let Some(offer) = offers
            .into_iter()
            .find(|o| o.is_active && o.matches_code(&code))
        else {
            tracing::debug!(code = %code, "Promo code not found");
            return Err(AppError::new(ErrorCode::PromoCodeInvalid).with_detail("code", code));
        };

        if !offer.is_within_window(now) {
            tracing::debug!(code = %code, offer_id = %offer.id, "Promo code outside validity window");
            return Err(AppError::new(ErrorCode::PromoCodeExpired)
                .with_detail("code", code)
                .with_detail("validTo", offer.valid_to.to_rfc3339()));
        }

        tracing::info!(code = %code, offer_id = %offer.id, "Promo code applied");
        Ok(offer)
    }

    /// Offers that are active and inside their window at `now`
    pub async fn active_offers(&self, now: DateTime<Utc>) -> AppResult<Vec<Offer>> {
        let offers = self.repo.find_all().await?;
        Ok(offers.into_iter().filter(|o| o.is_valid_at(now)).collect())
    }
}
