use super::{Element, TextEntry, Widget, WidgetKind};
use crate::core::Session;
use crate::errors::Result;

widget! {
    /// `st.number_input`; typing goes to its `input`.
    NumberInput => WidgetKind::NumberInput
}

widget! {
    /// `st.text_input`.
    TextInput => WidgetKind::TextInput
}

widget! {
    /// `st.selectbox`. Type an option's text and press return to pick it.
    Selectbox => WidgetKind::Selectbox
}

impl<'s, S: Session + 's> TextEntry<'s, S> for NumberInput<'s, S> {}

impl<'s, S: Session + 's> TextEntry<'s, S> for TextInput<'s, S> {}

impl<'s, S: Session + 's> TextEntry<'s, S> for Selectbox<'s, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Key;
    use crate::errors::TesterError;
    use crate::dom::{Action, StaticPage};
    use crate::fixtures;

    #[test]
    fn number_inputs_resolve_to_their_own_nodes() {
        let page = StaticPage::parse(fixtures::NUMBER_INPUT_PAGE);
        let first = NumberInput::find(&page, "First Number").unwrap();
        let second = NumberInput::find(&page, "Second Number").unwrap();

        first.enter_text(1).unwrap();
        second.enter_text(2).unwrap();

        assert_eq!(first.element().target().value(), "1");
        assert_eq!(second.element().target().value(), "2");
        assert_eq!(first.label(), "First Number");
        assert_eq!(second.kind(), WidgetKind::NumberInput);
    }

    #[test]
    fn selectbox_chains_text_and_return() {
        let page = StaticPage::parse(fixtures::SELECTBOX_PAGE);

        Selectbox::find(&page, "Subpage Navigator")
            .unwrap()
            .enter_text("Second Page")
            .unwrap()
            .enter_return()
            .unwrap();

        let actions: Vec<Action> = page.interactions().into_iter().map(|i| i.action).collect();
        assert_eq!(
            actions,
            vec![
                Action::Key(Key::SelectAll),
                Action::Key(Key::Delete),
                Action::Text("Second Page".to_string()),
                Action::Key(Key::Return),
            ]
        );
    }

    #[test]
    fn kinds_do_not_cross_match() {
        let page = StaticPage::parse(fixtures::WIDGET_GALLERY);

        assert!(TextInput::find(&page, "First Number").is_err());
        assert!(NumberInput::find(&page, "Name").is_err());
        assert!(Selectbox::find(&page, "Favourite colour").is_ok());
    }

    #[test]
    fn typed_text_lands_on_the_input_node() {
        let page = StaticPage::parse(fixtures::WIDGET_GALLERY);
        let input = TextInput::find(&page, "Name").unwrap();
        input.enter_text("Ada").unwrap();

        let interactions = page.interactions();
        assert!(interactions.iter().all(|i| i.tag_name == "input"));
        assert!(interactions
            .iter()
            .all(|i| i.xpath == input.element().target().xpath()));
    }

    #[test]
    fn absent_selectbox_names_the_label() {
        let page = StaticPage::parse(fixtures::WIDGET_GALLERY);
        let err = Selectbox::find(&page, "Favourite animal").unwrap_err();

        assert!(matches!(
            err,
            TesterError::LabelNotFound { kind: WidgetKind::Selectbox, ref label }
                if label == "Favourite animal"
        ));
        assert_eq!(
            err.to_string(),
            "Could not find selectbox with label: Favourite animal"
        );
        assert!(page.interactions().is_empty());
    }
}
