//! 表单校验模块
//!
//! 校验规则在提交前于客户端执行，失败时返回字段级错误信息，
//! 通过后产出可直接编码为请求体的值对象。

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::Credentials;
use crate::date::{MIN_ACCIDENT_DATE, to_wire_date};
use crate::protocol::{MultipartForm, UploadFile};

/// 单张图片的大小上限 (5 MiB)
pub const MAX_IMAGE_SIZE: u64 = 5 * 1024 * 1024;

pub const ACCEPTED_IMAGE_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/jpg", "image/gif"];

pub const MSG_REQUIRED: &str = "Required";
pub const MSG_IMAGE_RULES: &str = "Only .png, .jpeg, .jpg and .gif images of 5MB or less are accepted";

// =========================================================
// 字段级错误集合
// =========================================================

/// 字段 -> 错误信息，每个字段只保留第一条
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord + Copy> ValidationErrors<F> {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, field: F, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl<F: Ord + Copy> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Ord + Copy + fmt::Display> fmt::Display for ValidationErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, msg)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, msg)?;
        }
        Ok(())
    }
}

// =========================================================
// 理赔创建表单
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClaimField {
    PolicyNumber,
    DateOfAccident,
    AccidentType,
    Description,
    DamageDetails,
    InjuriesReported,
    Images,
}

impl ClaimField {
    /// 与 API 字段名一致
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimField::PolicyNumber => "policy_number",
            ClaimField::DateOfAccident => "date_of_accident",
            ClaimField::AccidentType => "accident_type",
            ClaimField::Description => "description",
            ClaimField::DamageDetails => "damage_details",
            ClaimField::InjuriesReported => "injuries_reported",
            ClaimField::Images => "images",
        }
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 图片被拒的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRejection {
    TooLarge,
    UnsupportedType,
}

pub fn check_image(file: &UploadFile) -> Result<(), ImageRejection> {
    check_image_meta(&file.mime_type, file.size())
}

/// 只凭类型与大小判断，选择文件后无需读取内容即可提示
pub fn check_image_meta(mime_type: &str, size: u64) -> Result<(), ImageRejection> {
    if !ACCEPTED_IMAGE_TYPES.contains(&mime_type) {
        return Err(ImageRejection::UnsupportedType);
    }
    if size > MAX_IMAGE_SIZE {
        return Err(ImageRejection::TooLarge);
    }
    Ok(())
}

/// 用户正在编辑的理赔表单内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimDraft {
    pub policy_number: String,
    pub date_of_accident: Option<NaiveDate>,
    pub accident_type: String,
    pub description: String,
    pub damage_details: String,
    pub injuries_reported: bool,
    pub images: Vec<UploadFile>,
}

/// 校验通过的理赔
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClaim {
    pub policy_number: String,
    pub date_of_accident: NaiveDate,
    pub accident_type: String,
    pub description: String,
    pub damage_details: String,
    pub injuries_reported: bool,
    pub images: Vec<UploadFile>,
}

impl ClaimDraft {
    /// 校验表单
    ///
    /// `today` 由调用方给出，事故日期须落在 `[1900-01-01, today]`。
    pub fn validate(self, today: NaiveDate) -> Result<NewClaim, ValidationErrors<ClaimField>> {
        let mut errors = ValidationErrors::new();

        for (field, value) in [
            (ClaimField::PolicyNumber, &self.policy_number),
            (ClaimField::AccidentType, &self.accident_type),
            (ClaimField::Description, &self.description),
            (ClaimField::DamageDetails, &self.damage_details),
        ] {
            if value.trim().is_empty() {
                errors.add(field, MSG_REQUIRED);
            }
        }

        match self.date_of_accident {
            None => errors.add(ClaimField::DateOfAccident, MSG_REQUIRED),
            Some(d) if d > today => {
                errors.add(ClaimField::DateOfAccident, "Date cannot be in the future")
            }
            Some(d) if d < MIN_ACCIDENT_DATE => {
                errors.add(ClaimField::DateOfAccident, "Date cannot be before 1900-01-01")
            }
            Some(_) => {}
        }

        if self.images.is_empty() {
            errors.add(ClaimField::Images, "At least one image is required");
        } else if self.images.iter().any(|f| check_image(f).is_err()) {
            errors.add(ClaimField::Images, MSG_IMAGE_RULES);
        }

        let date_of_accident = self.date_of_accident.unwrap_or(MIN_ACCIDENT_DATE);
        errors.into_result(NewClaim {
            policy_number: self.policy_number.trim().to_string(),
            date_of_accident,
            accident_type: self.accident_type.trim().to_string(),
            description: self.description,
            damage_details: self.damage_details,
            injuries_reported: self.injuries_reported,
            images: self.images,
        })
    }
}

impl NewClaim {
    /// 编码为 multipart 表单，图片集合转为 `images[0]`, `images[1]` ... 的下标映射
    pub fn to_multipart(&self) -> MultipartForm {
        let form = MultipartForm::new()
            .text(ClaimField::PolicyNumber.as_str(), &self.policy_number)
            .text(
                ClaimField::DateOfAccident.as_str(),
                to_wire_date(self.date_of_accident),
            )
            .text(ClaimField::AccidentType.as_str(), &self.accident_type)
            .text(ClaimField::Description.as_str(), &self.description)
            .text(ClaimField::DamageDetails.as_str(), &self.damage_details)
            .text(
                ClaimField::InjuriesReported.as_str(),
                self.injuries_reported.to_string(),
            );

        self.images
            .iter()
            .enumerate()
            .fold(form, |form, (i, file)| {
                form.file(format!("images[{}]", i), file.clone())
            })
    }
}

// =========================================================
// 登录 / 注册表单
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CredentialField {
    Email,
    Password,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialField::Email => f.write_str("email"),
            CredentialField::Password => f.write_str("password"),
        }
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

impl Credentials {
    pub fn validate(&self) -> Result<(), ValidationErrors<CredentialField>> {
        let mut errors = ValidationErrors::new();
        let email = self.email.trim();
        if email.is_empty() {
            errors.add(CredentialField::Email, MSG_REQUIRED);
        } else if !looks_like_email(email) {
            errors.add(CredentialField::Email, "Please enter a valid email address");
        }
        if self.password.is_empty() {
            errors.add(CredentialField::Password, MSG_REQUIRED);
        }
        errors.into_result(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn png(size: usize) -> UploadFile {
        UploadFile::new("photo.png", "image/png", vec![0u8; size])
    }

    fn valid_draft() -> ClaimDraft {
        ClaimDraft {
            policy_number: "pol-123456".into(),
            date_of_accident: NaiveDate::from_ymd_opt(2024, 6, 1),
            accident_type: "Property damage".into(),
            description: "Tree fell on the garage".into(),
            damage_details: "Roof and door".into(),
            injuries_reported: false,
            images: vec![png(1024)],
        }
    }

    #[test]
    fn accepts_valid_draft() {
        let claim = valid_draft().validate(today()).unwrap();
        assert_eq!(claim.policy_number, "pol-123456");
        assert!(!claim.injuries_reported);
    }

    #[test]
    fn missing_fields_are_reported_individually() {
        let draft = ClaimDraft {
            images: vec![png(10)],
            ..Default::default()
        };
        let errors = draft.validate(today()).unwrap_err();
        for field in [
            ClaimField::PolicyNumber,
            ClaimField::DateOfAccident,
            ClaimField::AccidentType,
            ClaimField::Description,
            ClaimField::DamageDetails,
        ] {
            assert_eq!(errors.get(field), Some(MSG_REQUIRED), "{}", field);
        }
        assert_eq!(errors.get(ClaimField::Images), None);
        assert_eq!(errors.get(ClaimField::InjuriesReported), None);
    }

    #[test]
    fn rejects_date_after_today() {
        let mut draft = valid_draft();
        draft.date_of_accident = today().succ_opt();
        let errors = draft.validate(today()).unwrap_err();
        assert!(errors.get(ClaimField::DateOfAccident).is_some());
    }

    #[test]
    fn rejects_date_before_1900() {
        let mut draft = valid_draft();
        draft.date_of_accident = NaiveDate::from_ymd_opt(1899, 12, 31);
        let errors = draft.validate(today()).unwrap_err();
        assert!(errors.get(ClaimField::DateOfAccident).is_some());
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let mut draft = valid_draft();
        draft.date_of_accident = Some(today());
        assert!(draft.clone().validate(today()).is_ok());

        draft.date_of_accident = Some(MIN_ACCIDENT_DATE);
        assert!(draft.validate(today()).is_ok());
    }

    #[test]
    fn rejects_oversized_image() {
        let big = png(MAX_IMAGE_SIZE as usize + 1);
        assert_eq!(check_image(&big), Err(ImageRejection::TooLarge));
        assert_eq!(check_image(&png(MAX_IMAGE_SIZE as usize)), Ok(()));

        let mut draft = valid_draft();
        draft.images.push(big);
        let errors = draft.validate(today()).unwrap_err();
        assert_eq!(errors.get(ClaimField::Images), Some(MSG_IMAGE_RULES));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn rejects_disallowed_mime_type() {
        let pdf = UploadFile::new("scan.pdf", "application/pdf", vec![1, 2, 3]);
        assert_eq!(check_image(&pdf), Err(ImageRejection::UnsupportedType));

        let mut draft = valid_draft();
        draft.images = vec![pdf];
        let errors = draft.validate(today()).unwrap_err();
        assert_eq!(errors.get(ClaimField::Images), Some(MSG_IMAGE_RULES));
    }

    #[test]
    fn metadata_check_before_reading() {
        assert_eq!(check_image_meta("image/gif", 10), Ok(()));
        assert_eq!(
            check_image_meta("image/webp", 10),
            Err(ImageRejection::UnsupportedType)
        );
        assert_eq!(
            check_image_meta("image/jpeg", MAX_IMAGE_SIZE + 1),
            Err(ImageRejection::TooLarge)
        );
    }

    #[test]
    fn requires_at_least_one_image() {
        let mut draft = valid_draft();
        draft.images.clear();
        let errors = draft.validate(today()).unwrap_err();
        assert!(errors.get(ClaimField::Images).is_some());
    }

    #[test]
    fn multipart_indexes_images() {
        let mut draft = valid_draft();
        draft.injuries_reported = true;
        draft.images = vec![
            png(3),
            UploadFile::new("b.jpg", "image/jpeg", vec![9; 4]),
        ];
        let form = draft.validate(today()).unwrap().to_multipart();

        assert_eq!(form.text_value("policy_number"), Some("pol-123456"));
        assert_eq!(
            form.text_value("date_of_accident"),
            Some("2024-06-01T00:00:00.000Z")
        );
        assert_eq!(form.text_value("injuries_reported"), Some("true"));
        assert!(form.get("images[0]").is_some());
        assert!(form.get("images[1]").is_some());
        assert!(form.get("images[2]").is_none());
    }

    #[test]
    fn credentials_rules() {
        let ok = Credentials {
            email: "john@example.com".into(),
            password: "hunter2".into(),
        };
        assert!(ok.validate().is_ok());

        let bad = Credentials {
            email: "john@".into(),
            password: String::new(),
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.get(CredentialField::Email).is_some());
        assert_eq!(errors.get(CredentialField::Password), Some(MSG_REQUIRED));
        assert_eq!(
            errors.to_string(),
            "email: Please enter a valid email address; password: Required"
        );
    }
}
