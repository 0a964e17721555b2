use crate::models::RawClick;
use serde_json::json;

pub fn sample_clicks() -> Vec<RawClick> {
    vec![
        json!({
            "host": "shortcm.xyz",
            "path": "/login",
            "method": "GET",
            "url": "https://app.short.cm/login",
            "dt": "2020-05-20T06:19:12.000Z",
            "st": 302,
            "ip": "202.83.57.227",
            "proto": "https",
            "ref": "https://blog-short-io.cdn.ampproject.org/v/s/blog.short.io/shortlinks-youtube/amp/?amp_js_v=a3&amp_gsa=1&usqp=mq331AQFKAGwASA%3D",
            "ua": "Mozilla/5.0 (Linux; Android 10; HD1901)...",
            "human": true,
            "browser": "Chrome Mobile",
            "browser_version": "81",
            "country": "India",
            "city": "Mumbai",
            "social": "",
            "refhost": "blog-short-io.cdn.ampproject.org",
            "os": "Android",
            "utm_source": "",
            "utm_medium": "unknown",
            "utm_campaign": "",
            "goal_completed": null,
            "ab_path": null,
            "lcpath": "/login"
        }),
        json!({
            "host": "shortcm.xyz",
            "path": "/dashboard",
            "method": "GET",
            "url": "https://app.short.cm/dashboard",
            "dt": "2020-05-20T15:30:45.000Z",
            "st": 200,
            "ip": "123.45.67.89",
            "proto": "https",
            "ref": "",
            "ua": "Mozilla/5.0 (Windows NT 10.0; Win64; x64)...",
            "human": true,
            "browser": "Chrome",
            "browser_version": "90",
            "country": "South Korea",
            "social": "",
            "refhost": "",
            "os": "Windows",
            "utm_source": "",
            "utm_medium": "",
            "utm_campaign": "",
            "goal_completed": null,
            "ab_path": null,
            "lcpath": "/dashboard"
        }),
        json!({
            "host": "shortcm.xyz",
            "method": "GET",
            "url": "https://app.short.cm/settings",
            "dt": "2020-05-20T20:45:30.000Z",
            "st": 200,
            "country": "United States",
            "city": "New York",
            "lcpath": "/settings"
        }),
        json!({
            "host": "shortcm.xyz",
            "path": "/api/data",
            "url": "https://app.short.cm/api/data",
            "dt": "2020-05-21T08:15:22.000Z",
            "country": "Japan",
            "city": "Tokyo"
        }),
        json!({
            "host": "shortcm.xyz",
            "url": "https://app.short.cm/products",
            "dt": "2020-05-21T12:30:10.000Z",
            "country": "Germany",
            "lcpath": "/products"
        }),
    ]
    .into_iter()
    .map(RawClick::new)
    .collect()
}
