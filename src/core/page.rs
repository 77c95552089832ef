use log::debug;
use reqwest::blocking::Client;

use crate::error::Result;

/// 一次GET请求得到的页面
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

/// 页面来源
///
/// 非200状态码作为数据返回，由调用方判断；传输层错误才返回Err。
pub trait PageSource {
    fn get(&self, url: &str) -> Result<Page>;
}

/// 基于reqwest阻塞客户端的页面来源，不带自定义请求头，超时和重定向都用默认值
#[derive(Debug, Clone, Default)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageSource for HttpPageSource {
    fn get(&self, url: &str) -> Result<Page> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!("HTTP {}，页面大小 {} 字节", status, body.len());

        Ok(Page { status, body })
    }
}
