// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{Html, Selector};
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

/// 页面元信息标签
#[derive(Debug, Clone, Default)]
pub struct MetaTags {
    /// meta description内容
    pub description: Option<String>,
    /// meta keywords内容
    pub keywords: Option<String>,
    /// meta robots内容
    pub robots: Option<String>,
    /// 是否声明viewport
    pub viewport: bool,
    /// canonical链接地址
    pub canonical: Option<String>,
    /// Open Graph标签
    pub og: BTreeMap<String, String>,
    /// Twitter Card标签
    pub twitter: BTreeMap<String, String>,
}

/// 页面链接
#[derive(Debug, Clone)]
pub struct PageLink {
    /// 链接地址（小写）
    pub href: String,
    /// 锚文本（小写）
    pub text: String,
    /// 是否带nofollow
    pub nofollow: bool,
}

/// 页面表单
#[derive(Debug, Clone)]
pub struct PageForm {
    /// input的type属性集合（小写）
    pub input_types: Vec<String>,
    /// 各控件的name+id拼接值（小写）
    pub control_names: Vec<String>,
    /// 控件总数（input + textarea + select）
    pub field_count: usize,
    /// 表单class属性值（小写）
    pub classes: String,
}

impl PageForm {
    /// 是否含邮箱输入框
    pub fn has_email_input(&self) -> bool {
        self.input_types.iter().any(|t| t == "email")
    }

    /// 是否存在匹配名称的控件
    pub fn has_control_named(&self, needle: &str) -> bool {
        self.control_names.iter().any(|n| n.contains(needle))
    }
}

/// 页面图片
#[derive(Debug, Clone)]
pub struct PageImage {
    /// 是否带alt属性
    pub has_alt_attr: bool,
    /// alt属性是否为空白
    pub alt_empty: bool,
    /// 是否懒加载
    pub lazy: bool,
    /// 是否响应式（srcset/sizes）
    pub responsive: bool,
}

/// 页面标题层级条目
#[derive(Debug, Clone)]
pub struct Heading {
    /// 标题层级（1-6）
    pub level: u8,
    /// 标题文本（截取前50个字符）
    pub text: String,
}

/// 页面文档快照
///
/// 抓取的HTML解析后的只读快照。由于`scraper::Html`不是`Send`，
/// 快照在构造时一次性提取出检测器需要读取的全部表面，
/// 检测器只读不写，可安全地在多个工作任务间共享。
#[derive(Debug)]
pub struct PageDocument {
    /// 页面来源URL
    pub url: Url,
    /// 页面标题
    pub title: Option<String>,
    /// 元信息标签
    pub meta: MetaTags,
    /// 原始HTML（小写）
    pub html_lower: String,
    /// 页面全文
    pub text: String,
    /// 页面全文（小写）
    pub text_lower: String,
    /// 外部脚本地址（小写）
    pub script_srcs: Vec<String>,
    /// 内联脚本内容（小写）
    pub inline_scripts: Vec<String>,
    /// 外部样式表地址（小写）
    pub stylesheet_hrefs: Vec<String>,
    /// 所有link元素的href（小写）
    pub link_hrefs: Vec<String>,
    /// 内联样式内容（小写）
    pub inline_styles: Vec<String>,
    /// 页面链接
    pub links: Vec<PageLink>,
    /// 页面表单
    pub forms: Vec<PageForm>,
    /// 是否存在弹窗/模态框内的表单
    pub modal_form_present: bool,
    /// 页面中email输入框总数（含表单外）
    pub email_input_count: usize,
    /// 页面图片
    pub images: Vec<PageImage>,
    /// 各层级标题数量（h1-h6，含空标题）
    pub heading_counts: [usize; 6],
    /// 非空标题条目
    pub headings: Vec<Heading>,
    /// 空标题数量
    pub empty_heading_count: usize,
    /// iframe地址（小写）
    pub iframe_srcs: Vec<String>,
    /// JSON-LD结构化数据块
    pub json_ld: Vec<Value>,
    /// JSON-LD声明的schema类型（小写）
    pub schema_types: Vec<String>,
    /// Microdata itemtype值
    pub microdata_types: Vec<String>,
    /// RDFa typeof值
    pub rdfa_types: Vec<String>,
    /// 所有元素的id与class属性值（小写），用于选择器式探测
    pub attr_tokens: Vec<String>,
    /// button元素文本（小写）
    pub button_texts: Vec<String>,
    /// button与a元素总数
    pub button_like_count: usize,
    /// class含btn/button/cta的可点击元素数量
    pub cta_count: usize,
}

impl PageDocument {
    /// 从HTML构建页面快照
    ///
    /// 解析过程对畸形HTML宽容：缺失的标签和属性按"未找到"处理，不产生错误。
    pub fn from_html(url: Url, html: &str) -> Self {
        let doc = Html::parse_document(html);
        let html_lower = html.to_lowercase();

        let title = select_first_text(&doc, "title");
        let meta = extract_meta(&doc);

        let text: String = doc.root_element().text().collect::<Vec<_>>().join(" ");
        let text_lower = text.to_lowercase();

        let mut script_srcs = Vec::new();
        let mut inline_scripts = Vec::new();
        let mut json_ld = Vec::new();
        let mut schema_types = Vec::new();
        let script_sel = Selector::parse("script").unwrap();
        for el in doc.select(&script_sel) {
            if let Some(src) = el.value().attr("src") {
                script_srcs.push(src.to_lowercase());
                continue;
            }
            let body: String = el.text().collect();
            if el.value().attr("type") == Some("application/ld+json") {
                if let Ok(value) = serde_json::from_str::<Value>(&body) {
                    if let Some(type_name) = value.get("@type").and_then(Value::as_str) {
                        schema_types.push(type_name.to_lowercase());
                    }
                    json_ld.push(value);
                }
            } else if !body.trim().is_empty() {
                inline_scripts.push(body.to_lowercase());
            }
        }

        let mut stylesheet_hrefs = Vec::new();
        let mut link_hrefs = Vec::new();
        let link_el_sel = Selector::parse("link[href]").unwrap();
        for el in doc.select(&link_el_sel) {
            let href = el.value().attr("href").unwrap_or_default().to_lowercase();
            if el.value().attr("rel") == Some("stylesheet") {
                stylesheet_hrefs.push(href.clone());
            }
            link_hrefs.push(href);
        }

        let mut inline_styles = Vec::new();
        let style_sel = Selector::parse("style").unwrap();
        for el in doc.select(&style_sel) {
            inline_styles.push(el.text().collect::<String>().to_lowercase());
        }

        let mut links = Vec::new();
        let link_sel = Selector::parse("a[href]").unwrap();
        for el in doc.select(&link_sel) {
            let rel = el.value().attr("rel").unwrap_or_default();
            links.push(PageLink {
                href: el.value().attr("href").unwrap_or_default().to_lowercase(),
                text: el.text().collect::<String>().trim().to_lowercase(),
                nofollow: rel.contains("nofollow"),
            });
        }

        let mut forms = Vec::new();
        let form_sel = Selector::parse("form").unwrap();
        let control_sel = Selector::parse("input, textarea, select").unwrap();
        let input_sel = Selector::parse("input").unwrap();
        for form in doc.select(&form_sel) {
            let mut input_types = Vec::new();
            for input in form.select(&input_sel) {
                input_types.push(
                    input
                        .value()
                        .attr("type")
                        .unwrap_or("text")
                        .to_lowercase(),
                );
            }
            let mut control_names = Vec::new();
            let mut field_count = 0;
            for control in form.select(&control_sel) {
                field_count += 1;
                let name = control.value().attr("name").unwrap_or_default();
                let id = control.value().attr("id").unwrap_or_default();
                control_names.push(format!("{}{}", name, id).to_lowercase());
            }
            forms.push(PageForm {
                input_types,
                control_names,
                field_count,
                classes: form.value().attr("class").unwrap_or_default().to_lowercase(),
            });
        }

        let email_input_sel = Selector::parse(r#"input[type="email"]"#).unwrap();
        let email_input_count = doc.select(&email_input_sel).count();

        let mut modal_form_present = false;
        let div_sel = Selector::parse("div").unwrap();
        for el in doc.select(&div_sel) {
            let classes = el.value().attr("class").unwrap_or_default().to_lowercase();
            if (classes.contains("modal")
                || classes.contains("popup")
                || classes.contains("overlay"))
                && el.select(&form_sel).next().is_some()
            {
                modal_form_present = true;
                break;
            }
        }

        let mut images = Vec::new();
        let img_sel = Selector::parse("img").unwrap();
        for el in doc.select(&img_sel) {
            let alt = el.value().attr("alt");
            let classes = el.value().attr("class").unwrap_or_default();
            images.push(PageImage {
                has_alt_attr: alt.is_some(),
                alt_empty: alt.map(|a| a.trim().is_empty()).unwrap_or(false),
                lazy: el.value().attr("loading") == Some("lazy") || classes.contains("lazy"),
                responsive: el.value().attr("srcset").is_some()
                    || el.value().attr("sizes").is_some(),
            });
        }

        let mut heading_counts = [0usize; 6];
        let mut headings = Vec::new();
        let mut empty_heading_count = 0;
        for level in 1..=6u8 {
            let sel = Selector::parse(&format!("h{}", level)).unwrap();
            for el in doc.select(&sel) {
                heading_counts[(level - 1) as usize] += 1;
                let heading_text: String = el.text().collect::<String>().trim().to_string();
                if heading_text.is_empty() {
                    empty_heading_count += 1;
                } else {
                    headings.push(Heading {
                        level,
                        text: heading_text.chars().take(50).collect(),
                    });
                }
            }
        }

        let mut iframe_srcs = Vec::new();
        let iframe_sel = Selector::parse("iframe[src]").unwrap();
        for el in doc.select(&iframe_sel) {
            iframe_srcs.push(el.value().attr("src").unwrap_or_default().to_lowercase());
        }

        let mut microdata_types = Vec::new();
        let microdata_sel = Selector::parse("[itemtype]").unwrap();
        for el in doc.select(&microdata_sel) {
            microdata_types.push(el.value().attr("itemtype").unwrap_or_default().to_string());
        }

        let mut rdfa_types = Vec::new();
        let rdfa_sel = Selector::parse("[typeof]").unwrap();
        for el in doc.select(&rdfa_sel) {
            rdfa_types.push(el.value().attr("typeof").unwrap_or_default().to_string());
        }

        let mut attr_tokens = Vec::new();
        let all_sel = Selector::parse("*").unwrap();
        for el in doc.select(&all_sel) {
            if let Some(id) = el.value().attr("id") {
                attr_tokens.push(id.to_lowercase());
            }
            if let Some(classes) = el.value().attr("class") {
                attr_tokens.push(classes.to_lowercase());
            }
        }

        let mut button_texts = Vec::new();
        let button_sel = Selector::parse("button").unwrap();
        for el in doc.select(&button_sel) {
            button_texts.push(el.text().collect::<String>().trim().to_lowercase());
        }

        let clickable_sel = Selector::parse("button, a").unwrap();
        let mut button_like_count = 0;
        let mut cta_count = 0;
        for el in doc.select(&clickable_sel) {
            button_like_count += 1;
            let classes = el.value().attr("class").unwrap_or_default().to_lowercase();
            if classes.contains("btn") || classes.contains("button") || classes.contains("cta") {
                cta_count += 1;
            }
        }

        Self {
            url,
            title,
            meta,
            html_lower,
            text,
            text_lower,
            script_srcs,
            inline_scripts,
            stylesheet_hrefs,
            link_hrefs,
            inline_styles,
            links,
            forms,
            modal_form_present,
            email_input_count,
            images,
            heading_counts,
            headings,
            empty_heading_count,
            iframe_srcs,
            json_ld,
            schema_types,
            microdata_types,
            rdfa_types,
            attr_tokens,
            button_texts,
            button_like_count,
            cta_count,
        }
    }

    /// id或class属性值中是否出现指定片段
    pub fn has_attr_token(&self, needle: &str) -> bool {
        self.attr_tokens.iter().any(|token| token.contains(needle))
    }
}

fn select_first_text(doc: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn extract_meta(doc: &Html) -> MetaTags {
    let mut meta = MetaTags::default();

    let meta_sel = Selector::parse("meta").unwrap();
    for el in doc.select(&meta_sel) {
        let content = el.value().attr("content").unwrap_or_default().trim();
        if let Some(name) = el.value().attr("name") {
            match name.to_lowercase().as_str() {
                "description" => meta.description = Some(content.to_string()),
                "keywords" => meta.keywords = Some(content.to_string()),
                "robots" => meta.robots = Some(content.to_string()),
                "viewport" => meta.viewport = true,
                other => {
                    if let Some(card) = other.strip_prefix("twitter:") {
                        meta.twitter.insert(card.to_string(), content.to_string());
                    }
                }
            }
        }
        if let Some(property) = el.value().attr("property") {
            if let Some(og) = property.to_lowercase().strip_prefix("og:") {
                meta.og.insert(og.to_string(), content.to_string());
            }
        }
    }

    let canonical_sel = Selector::parse(r#"link[rel="canonical"]"#).unwrap();
    meta.canonical = doc
        .select(&canonical_sel)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(|href| href.trim().to_string());

    meta
}
