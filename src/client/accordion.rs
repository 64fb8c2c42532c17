//! FAQ accordion, at most one item open

/// Inline style applied to an answer panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerStyle {
    pub max_height: String,
    pub padding: &'static str,
}

const OPEN_PADDING: &str = "0 25px 25px";
const CLOSED_PADDING: &str = "0 25px";

#[derive(Debug, Clone)]
pub struct Accordion {
    /// Natural height of each answer, in px
    answer_heights: Vec<u32>,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(answer_heights: Vec<u32>) -> Self {
        Self {
            answer_heights,
            open: None,
        }
    }

    /// Question click: close any other open item and toggle this one
    pub fn click(&mut self, index: usize) {
        if index >= self.answer_heights.len() {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub const fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn answer_style(&self, index: usize) -> Option<AnswerStyle> {
        let height = *self.answer_heights.get(index)?;
        Some(if self.is_open(index) {
            AnswerStyle {
                max_height: format!("{height}px"),
                padding: OPEN_PADDING,
            }
        } else {
            AnswerStyle {
                max_height: "0".to_string(),
                padding: CLOSED_PADDING,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_open() {
        let mut faq = Accordion::new(vec![120, 80, 200]);
        faq.click(0);
        assert_eq!(faq.open_item(), Some(0));
        faq.click(2);
        assert_eq!(faq.open_item(), Some(2));
        assert!(!faq.is_open(0));
    }

    #[test]
    fn test_click_open_item_closes_it() {
        let mut faq = Accordion::new(vec![120, 80]);
        faq.click(1);
        faq.click(1);
        assert_eq!(faq.open_item(), None);
    }

    #[test]
    fn test_answer_styles() {
        let mut faq = Accordion::new(vec![120, 80]);
        faq.click(0);
        assert_eq!(
            faq.answer_style(0),
            Some(AnswerStyle {
                max_height: "120px".to_string(),
                padding: "0 25px 25px",
            })
        );
        assert_eq!(faq.answer_style(1).unwrap().max_height, "0");
        assert_eq!(faq.answer_style(1).unwrap().padding, "0 25px");
        assert!(faq.answer_style(5).is_none());
    }

    #[test]
    fn test_out_of_range_click_ignored() {
        let mut faq = Accordion::new(vec![10]);
        faq.click(0);
        faq.click(3);
        assert_eq!(faq.open_item(), Some(0));
    }
}
