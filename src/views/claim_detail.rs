use claims_portal_shared::ClaimDetailResponse;
use claims_portal_shared::date::display_date;

use super::{Screen, yes_no};
use crate::log_warn;
use crate::query::ViewState;
use crate::route::AppRoute;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimDetailView {
    pub policy_number: String,
    pub date_of_accident: String,
    pub accident_type: String,
    pub description: String,
    pub damage_details: String,
    pub injuries_reported: &'static str,
    /// 服务端解析好的图片地址
    pub images: Vec<String>,
}

impl From<&ClaimDetailResponse> for ClaimDetailView {
    fn from(detail: &ClaimDetailResponse) -> Self {
        let claim = &detail.claim;
        Self {
            policy_number: claim.policy_number.clone(),
            date_of_accident: display_date(&claim.date_of_accident),
            accident_type: claim.accident_type.clone(),
            description: claim.description.clone(),
            damage_details: claim.damage_details.clone(),
            injuries_reported: yes_no(claim.injuries_reported),
            images: detail.images.clone(),
        }
    }
}

/// 详情视图：拉取失败直接回到列表，不提示
pub fn claim_detail(state: &ViewState<ClaimDetailResponse>) -> Screen<ClaimDetailView> {
    Screen::gate(
        state,
        |detail| Screen::Content(ClaimDetailView::from(detail)),
        |e| {
            log_warn!("[ClaimDetail] redirecting to list: {}", e);
            Screen::Redirect(AppRoute::Claims)
        },
    )
}
