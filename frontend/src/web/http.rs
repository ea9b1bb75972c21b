//! HTTP 请求封装模块
//!
//! 基于 `web_sys::fetch` 实现核心库的 `HttpClient`，
//! JSON 请求体按字符串发送，multipart 请求体转换为浏览器 `FormData`。

use claims_portal::request::{HttpClient, HttpRequest, HttpResponse, RequestBody};
use claims_portal::{ClientError, ClientResult};
use claims_portal_shared::protocol::{FormPart, MultipartForm, UploadFile};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Headers, Request, RequestInit, Response};

fn build_failed(what: &str, e: JsValue) -> ClientError {
    ClientError::invalid(format!("{}: {:?}", what, e))
}

/// 将内存中的文件包装为带 MIME 类型的 `Blob`
fn to_blob(file: &UploadFile) -> Result<Blob, JsValue> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let opts = BlobPropertyBag::new();
    opts.set_type(&file.mime_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
}

fn to_form_data(form: &MultipartForm) -> ClientResult<FormData> {
    let data = FormData::new().map_err(|e| build_failed("创建 FormData 失败", e))?;
    for part in form.parts() {
        match part {
            FormPart::Text { name, value } => data
                .append_with_str(name, value)
                .map_err(|e| build_failed("写入表单字段失败", e))?,
            FormPart::File { name, file } => {
                let blob = to_blob(file).map_err(|e| build_failed("创建 Blob 失败", e))?;
                data.append_with_blob_and_filename(name, &blob, &file.file_name)
                    .map_err(|e| build_failed("写入文件失败", e))?
            }
        }
    }
    Ok(data)
}

async fn read_text(response: &Response) -> ClientResult<String> {
    let promise = response
        .text()
        .map_err(|e| ClientError::decode(format!("{:?}", e)))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| ClientError::decode(format!("{:?}", e)))?;
    text.as_string()
        .ok_or_else(|| ClientError::decode("响应体无法转换为字符串"))
}

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let headers = Headers::new().map_err(|e| build_failed("创建 Headers 失败", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| build_failed("设置 Header 失败", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        // multipart 不设置 Content-Type，由浏览器补充 boundary
        match &req.body {
            RequestBody::Empty => {}
            RequestBody::Json(body) => opts.set_body(&JsValue::from_str(body)),
            RequestBody::Multipart(form) => opts.set_body(&to_form_data(form)?.into()),
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| build_failed("创建 Request 失败", e))?;

        let window =
            web_sys::window().ok_or_else(|| ClientError::network("无法获取 window 对象"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ClientError::network(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ClientError::decode(format!("Response 类型转换失败: {:?}", e)))?;

        Ok(HttpResponse {
            status: response.status(),
            body: read_text(&response).await?,
        })
    }
}
