//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 [`HttpClient`] 特性，替代 `gloo-net`。

use truthlens::error::HttpError;
use truthlens::request::{HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// 基于 `window.fetch` 的 HTTP 客户端
#[derive(Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn build_request(req: &HttpRequest) -> Result<Request, HttpError> {
        let headers = Headers::new()
            .map_err(|e| HttpError::RequestBuild(format!("创建 Headers 失败: {:?}", e)))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| HttpError::RequestBuild(format!("设置 Header 失败: {:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| HttpError::RequestBuild(format!("{:?}", e)))
    }

    async fn read_text(response: &Response) -> Result<String, HttpError> {
        let promise = response
            .text()
            .map_err(|e| HttpError::ResponseRead(format!("{:?}", e)))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| HttpError::ResponseRead(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| HttpError::ResponseRead("无法转换为字符串".to_string()))
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let request = Self::build_request(&req)?;

        let window = web_sys::window()
            .ok_or_else(|| HttpError::Network("无法获取 window 对象".to_string()))?;

        // fetch 只在网络层失败时 reject，非 2xx 状态仍会正常返回
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| HttpError::Network(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| HttpError::ResponseRead(format!("Response 类型转换失败: {:?}", e)))?;

        let status = response.status();
        let body = Self::read_text(&response).await?;

        Ok(HttpResponse { status, body })
    }
}
