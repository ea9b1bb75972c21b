use claims_portal_shared::date::display_date;
use claims_portal_shared::{Claim, ClaimListResponse};

use super::{Screen, yes_no};
use crate::log_error;
use crate::notify::Notification;
use crate::query::ViewState;
use crate::route::AppRoute;

/// 表头，顺序与 [`ClaimRow::cells`] 一致
pub const COLUMNS: [&str; 6] = [
    "Policy Number",
    "Accident Type",
    "Damage Details",
    "Injuries Reported",
    "Date of Accident",
    "Number of Images",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRow {
    pub id: i64,
    pub policy_number: String,
    pub accident_type: String,
    pub damage_details: String,
    pub injuries_reported: &'static str,
    pub date_of_accident: String,
    pub image_count: usize,
}

impl ClaimRow {
    /// 点击行后进入的详情页
    pub fn route(&self) -> AppRoute {
        AppRoute::ClaimDetail(self.id)
    }

    pub fn cells(&self) -> [String; 6] {
        [
            self.policy_number.clone(),
            self.accident_type.clone(),
            self.damage_details.clone(),
            self.injuries_reported.to_string(),
            self.date_of_accident.clone(),
            self.image_count.to_string(),
        ]
    }
}

impl From<&Claim> for ClaimRow {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.id,
            policy_number: claim.policy_number.clone(),
            accident_type: claim.accident_type.clone(),
            damage_details: claim.damage_details.clone(),
            injuries_reported: yes_no(claim.injuries_reported),
            date_of_accident: display_date(&claim.date_of_accident),
            image_count: claim.image_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClaimsTable {
    pub screen: Screen<Vec<ClaimRow>>,
    /// 拉取失败时弹出的提示
    pub notification: Option<Notification>,
}

/// 列表视图：失败时表格为空并给出失败提示
pub fn claims_table(state: &ViewState<ClaimListResponse>) -> ClaimsTable {
    let mut notification = None;
    let screen = Screen::gate(
        state,
        |list| Screen::Content(list.claims.iter().map(ClaimRow::from).collect()),
        |e| {
            log_error!("[Claims] failed to load claims: {}", e);
            notification = Some(Notification::generic_failure());
            Screen::Content(Vec::new())
        },
    );
    ClaimsTable {
        screen,
        notification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::notify::NotificationLevel;
    use crate::testing::list_json;

    fn loaded(ids: &[i64]) -> ViewState<ClaimListResponse> {
        ViewState::Ready(serde_json::from_value(list_json(ids)).unwrap())
    }

    #[test]
    fn rows_follow_server_order() {
        let table = claims_table(&loaded(&[3, 1]));
        assert_eq!(table.notification, None);

        let Screen::Content(rows) = table.screen else {
            panic!("expected table rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].route(), AppRoute::ClaimDetail(3));
        assert_eq!(
            rows[0].cells(),
            [
                "pol-3".to_string(),
                "Car accident".to_string(),
                "Bumper and trunk".to_string(),
                "Yes".to_string(),
                "1/5/2024".to_string(),
                "2".to_string(),
            ]
        );
    }

    #[test]
    fn failure_renders_empty_table_with_notification() {
        let state = ViewState::Failed(ClientError::from_response(500, "{}"));
        let table = claims_table(&state);

        assert_eq!(table.screen, Screen::Content(Vec::new()));
        let notification = table.notification.unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert_eq!(notification, Notification::generic_failure());
    }

    #[test]
    fn loading_and_signed_out() {
        assert_eq!(claims_table(&ViewState::Loading).screen, Screen::Skeleton);
        assert_eq!(
            claims_table(&ViewState::Unauthenticated).screen,
            Screen::LoginPrompt
        );
        assert_eq!(claims_table(&ViewState::Unauthenticated).notification, None);
    }
}
