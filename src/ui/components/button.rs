//! Button component with variants.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Round floating action button.
    Fab,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Fab => "btn btn-fab",
        }
    }
}

/// Button component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Primary label="Enviar" on_click=submit>
///         "Enviar"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Accessible label.
    #[prop(default = "")]
    label: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Click handler.
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = format!("{} {}", variant.classes(), class);

    view! {
        <button
            type="button"
            class=classes
            aria-label=label
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        assert_eq!(ButtonVariant::default().classes(), "btn btn-primary");
        assert!(ButtonVariant::Fab.classes().contains("btn-fab"));
    }
}
