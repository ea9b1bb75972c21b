//! 理赔表单状态
//!
//! 将零散的 signal 整合为 `ClaimFormState`，负责数据的持有以及到 `ClaimDraft` 的转换。
//! 提交后表单保持原样，因此没有 reset。

use claims_portal_shared::date::parse_input_date;
use claims_portal_shared::validation::{ClaimDraft, ClaimField, ValidationErrors};
use leptos::prelude::*;

/// `RwSignal` 实现了 `Copy`，整个状态可以直接作为 Props 传递
#[derive(Clone, Copy)]
pub struct ClaimFormState {
    pub policy_number: RwSignal<String>,
    /// `<input type="date">` 的原始值
    pub date_of_accident: RwSignal<String>,
    pub accident_type: RwSignal<String>,
    pub description: RwSignal<String>,
    pub damage_details: RwSignal<String>,
    pub injuries_reported: RwSignal<bool>,
    /// 所选文件的句柄，内容在提交时才读取
    pub images: RwSignal<Vec<web_sys::File>, LocalStorage>,
    pub errors: RwSignal<ValidationErrors<ClaimField>>,
}

impl ClaimFormState {
    pub fn new() -> Self {
        Self {
            policy_number: RwSignal::new(String::new()),
            date_of_accident: RwSignal::new(String::new()),
            accident_type: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            damage_details: RwSignal::new(String::new()),
            injuries_reported: RwSignal::new(false),
            images: RwSignal::new_local(Vec::new()),
            errors: RwSignal::new(ValidationErrors::new()),
        }
    }

    /// 图片留空，由提交流程读取文件后填入
    pub fn to_draft(&self) -> ClaimDraft {
        ClaimDraft {
            policy_number: self.policy_number.get(),
            date_of_accident: parse_input_date(&self.date_of_accident.get()),
            accident_type: self.accident_type.get(),
            description: self.description.get(),
            damage_details: self.damage_details.get(),
            injuries_reported: self.injuries_reported.get(),
            images: Vec::new(),
        }
    }

    /// 某字段当前的错误信息
    pub fn error_for(&self, field: ClaimField) -> impl Fn() -> Option<String> + Copy + use<> {
        let errors = self.errors;
        move || errors.with(|e| e.get(field).map(str::to_string))
    }
}

impl Default for ClaimFormState {
    fn default() -> Self {
        Self::new()
    }
}
