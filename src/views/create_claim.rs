use chrono::NaiveDate;
use claims_portal_shared::protocol::UploadFile;
use claims_portal_shared::validation::{ClaimDraft, ClaimField, ValidationErrors};

use super::Screen;
use crate::api::ClaimsApi;
use crate::auth::AuthStatus;
use crate::notify::Notification;
use crate::query::ViewState;
use crate::request::HttpClient;
use crate::session::SessionStore;
use crate::{log_error, log_info};

/// 创建页只依赖认证结果，没有需要预先拉取的数据
pub fn create_claim_state(auth: AuthStatus) -> ViewState<()> {
    if auth.is_loading {
        ViewState::Loading
    } else if auth.is_authenticated {
        ViewState::Ready(())
    } else {
        ViewState::Unauthenticated
    }
}

pub fn create_claim_screen(state: &ViewState<()>) -> Screen<()> {
    Screen::gate(state, |_| Screen::Content(()), |_| Screen::LoginPrompt)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 校验未通过，字段错误就地展示，未发请求
    Invalid(ValidationErrors<ClaimField>),
    /// 请求已完成，成功或失败都只给一条提示，表单保持原样
    Done(Notification),
}

/// 浏览器读取单个所选文件的结果，失败时为文件名
pub type ImageRead = Result<UploadFile, String>;

/// 用提交时读取到的文件替换草稿中的图片
///
/// 有文件读取失败时，图片字段给出读取失败的提示，其余字段照常校验。
fn attach_images(
    mut draft: ClaimDraft,
    reads: Vec<ImageRead>,
    today: NaiveDate,
) -> Result<ClaimDraft, ValidationErrors<ClaimField>> {
    let mut unreadable = Vec::new();
    draft.images.clear();
    for read in reads {
        match read {
            Ok(file) => draft.images.push(file),
            Err(name) => unreadable.push(name),
        }
    }
    if unreadable.is_empty() {
        return Ok(draft);
    }

    let mut errors = ValidationErrors::new();
    errors.add(
        ClaimField::Images,
        format!("Could not read {}", unreadable.join(", ")),
    );
    if let Err(rest) = draft.validate(today) {
        for (field, message) in rest.iter() {
            errors.add(field, message);
        }
    }
    Err(errors)
}

/// 读取完所选文件后提交
pub async fn submit_claim_files<C: HttpClient, S: SessionStore>(
    api: &ClaimsApi<C, S>,
    draft: ClaimDraft,
    reads: Vec<ImageRead>,
    today: NaiveDate,
) -> SubmitOutcome {
    match attach_images(draft, reads, today) {
        Ok(draft) => submit_claim(api, draft, today).await,
        Err(errors) => SubmitOutcome::Invalid(errors),
    }
}

/// 校验并提交理赔
///
/// 失败时只展示通用提示，具体原因写入日志。
pub async fn submit_claim<C: HttpClient, S: SessionStore>(
    api: &ClaimsApi<C, S>,
    draft: ClaimDraft,
    today: NaiveDate,
) -> SubmitOutcome {
    let claim = match draft.validate(today) {
        Ok(claim) => claim,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };

    match api.create_claim(claim).await {
        Ok(resp) => {
            log_info!("[CreateClaim] created claim {}", resp.claim_id);
            SubmitOutcome::Done(Notification::success(resp.message))
        }
        Err(e) => {
            log_error!("[CreateClaim] submit failed: {}", e);
            SubmitOutcome::Done(Notification::generic_failure())
        }
    }
}
