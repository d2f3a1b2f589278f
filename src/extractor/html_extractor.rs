//! HTML标签提取器
//! 负责从HTML中提取全部元素（标签名+属性）和页面标题

use std::cell::RefCell;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts
};
use markup5ever::interface::Attribute;
use tendril::StrTendril;

/// 元素节点（开始标签）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
}

impl ElementNode {
    /// 读取属性值
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// 判断class属性中是否包含指定类名
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class_name))
    }
}

/// 提取结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractResult {
    pub elements: Vec<ElementNode>,
    pub title: Option<String>,
}

impl ExtractResult {
    /// 按标签名遍历元素
    pub fn elements_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a ElementNode> + 'a {
        self.elements.iter().filter(move |el| el.tag == tag)
    }
}

#[derive(Debug, Default)]
pub struct HtmlExtractor {
    elements: RefCell<Vec<ElementNode>>,
    title: RefCell<Option<String>>,
    in_title: RefCell<bool>,
    title_seen: RefCell<bool>,
}

impl TokenSink for HtmlExtractor {
    type Handle = ();

    fn process_token(&self, token: Token, _line: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(Tag { kind: TagKind::StartTag, name, self_closing, attrs }) => {
                let tag = name.as_ref().to_string();
                self.elements.borrow_mut().push(ElementNode {
                    tag: tag.clone(),
                    attrs: Self::collect_attrs(&attrs),
                });

                // 自闭合标签（如 <script src="..."/>）没有内容，不切换原始文本模式
                if self_closing {
                    return TokenSinkResult::Continue;
                }

                // 与浏览器一致：script/style/title 的内容不作为标签解析
                match tag.as_str() {
                    "title" => {
                        // 只采集第一个<title>，即使其内容为空
                        if !*self.title_seen.borrow() {
                            *self.title_seen.borrow_mut() = true;
                            *self.in_title.borrow_mut() = true;
                        }
                        return TokenSinkResult::RawData(RawKind::Rcdata);
                    }
                    "textarea" => return TokenSinkResult::RawData(RawKind::Rcdata),
                    "script" => return TokenSinkResult::RawData(RawKind::ScriptData),
                    "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
                        return TokenSinkResult::RawData(RawKind::Rawtext);
                    }
                    _ => {}
                }
            }
            Token::TagToken(Tag { kind: TagKind::EndTag, name, .. }) => {
                if name.as_ref() == "title" {
                    *self.in_title.borrow_mut() = false;
                }
            }
            Token::CharacterTokens(text) => {
                if *self.in_title.borrow() {
                    self.title
                        .borrow_mut()
                        .get_or_insert_with(String::new)
                        .push_str(&text);
                }
            }
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

impl HtmlExtractor {
    /// 创建新的提取器
    pub fn new() -> Self {
        Self::default()
    }

    /// 从HTML字符串提取元素与标题
    pub fn extract(html: &str) -> ExtractResult {
        let tokenizer = Tokenizer::new(Self::new(), TokenizerOpts::default());
        let queue = BufferQueue::default();
        queue.push_back(StrTendril::from(html));

        let _ = tokenizer.feed(&queue);
        tokenizer.end();

        let sink = tokenizer.sink;
        ExtractResult {
            elements: sink.elements.into_inner(),
            title: sink.title.into_inner(),
        }
    }

    fn collect_attrs(attrs: &[Attribute]) -> Vec<(String, String)> {
        attrs
            .iter()
            .map(|attr| (attr.name.local.as_ref().to_string(), attr.value.to_string()))
            .collect()
    }
}
