use super::{Element, Widget, WidgetKind};
use crate::core::{DomNode, Session};
use crate::errors::Result;

widget! {
    /// `st.button`, matched by the button's own text rather than a label tag.
    Button => WidgetKind::Button
}

impl<'s, S: Session + 's> Button<'s, S> {
    pub fn click_button(&self) -> Result<()> {
        self.element.target().click()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::StaticPage;
    use crate::fixtures;

    #[test]
    fn click_me_clicks_inner_button() {
        let page = StaticPage::parse(fixtures::BUTTON_CLICK_PAGE);
        let button = Button::find(&page, "Click Me").unwrap();

        button.click_button().unwrap();

        let interactions = page.interactions();
        assert_eq!(interactions.len(), 1);
        assert_eq!(interactions[0].tag_name, "button");
        assert_eq!(interactions[0].xpath, button.element().target().xpath());
    }

    #[test]
    fn picks_the_button_with_matching_text() {
        let page = StaticPage::parse(fixtures::WIDGET_GALLERY);
        let add = Button::find(&page, "Add").unwrap();
        let reset = Button::find(&page, "Reset").unwrap();

        assert_ne!(add.element().target().xpath(), reset.element().target().xpath());
        assert_eq!(add.element().target().attribute("id"), Some("add"));
    }

    #[test]
    fn missing_button_is_a_lookup_failure() {
        let page = StaticPage::parse(fixtures::BUTTON_CLICK_PAGE);
        let err = Button::find(&page, "Click").unwrap_err();

        assert!(err.is_lookup_failure());
        assert!(page.interactions().is_empty());
    }

    #[test]
    fn first_button_with_the_text_wins() {
        let page = StaticPage::parse(fixtures::WIDGET_GALLERY);
        let add = Button::find(&page, "Add").unwrap();

        add.click_button().unwrap();

        assert_eq!(add.element().target().attribute("id"), Some("add"));
        assert_eq!(page.clicks(), vec![add.element().target().xpath()]);
    }
}
