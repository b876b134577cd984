//! Centralized icon API rendering inline Material symbol glyphs.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named glyphs available to the primitive set.
pub enum IconName {
    /// Plus glyph for additive actions.
    Add,
    /// Back-chevron glyph.
    ArrowBack,
    /// Checkmark glyph.
    Check,
    /// Close/dismiss glyph.
    Close,
    /// Moon glyph for the dark color scheme.
    DarkMode,
    /// Heart glyph.
    Favorite,
    /// House glyph.
    Home,
    /// Sun glyph for the light color scheme.
    LightMode,
    /// Hamburger menu glyph.
    Menu,
    /// Magnifier glyph.
    Search,
    /// Gear glyph.
    Settings,
}

impl IconName {
    fn path(self) -> &'static str {
        match self {
            Self::Add => "M11 19v-6H5v-2h6V5h2v6h6v2h-6v6Z",
            Self::ArrowBack => "m10 22-10-10L10 2l1.775 1.775L3.55 12l8.225 8.225Z",
            Self::Check => "M9.55 18 3.85 12.3l1.425-1.425L9.55 15.15l9.175-9.175L20.15 7.4Z",
            Self::Close => {
                "m6.4 19-1.4-1.4 5.6-5.6-5.6-5.6L6.4 5l5.6 5.6L17.6 5 19 6.4 13.4 12l5.6 5.6-1.4 1.4-5.6-5.6Z"
            }
            Self::DarkMode => {
                "M12 21q-3.75 0-6.375-2.625T3 12q0-3.75 2.625-6.375T12 3q.35 0 .688.025.337.025.662.075-1.025.725-1.637 1.887Q11.1 6.15 11.1 7.5q0 2.25 1.575 3.825Q14.25 12.9 16.5 12.9q1.375 0 2.525-.613 1.15-.612 1.875-1.637.05.325.075.662Q21 11.65 21 12q0 3.75-2.625 6.375T12 21Z"
            }
            Self::Favorite => {
                "m12 21-1.45-1.3q-2.525-2.275-4.175-3.925T3.75 12.812Q2.775 11.5 2.388 10.4 2 9.3 2 8.15 2 5.8 3.575 4.225 5.15 2.65 7.5 2.65q1.3 0 2.475.55T12 4.75q.85-1 2.025-1.55 1.175-.55 2.475-.55 2.35 0 3.925 1.575Q22 5.8 22 8.15q0 1.15-.387 2.25-.388 1.1-1.363 2.412-.975 1.313-2.625 2.963-1.65 1.65-4.175 3.925Z"
            }
            Self::Home => "M6 19h3v-6h6v6h3v-9l-6-4.5L6 10Zm-2 2V9l8-6 8 6v12h-7v-6h-2v6Z",
            Self::LightMode => {
                "M12 17q-2.075 0-3.537-1.463Q7 14.075 7 12t1.463-3.538Q9.925 7 12 7t3.538 1.462Q17 9.925 17 12q0 2.075-1.462 3.537Q14.075 17 12 17ZM2 13q-.425 0-.712-.288Q1 12.425 1 12t.288-.713Q1.575 11 2 11h2q.425 0 .713.287Q5 11.575 5 12t-.287.712Q4.425 13 4 13Zm18 0q-.425 0-.712-.288Q19 12.425 19 12t.288-.713Q19.575 11 20 11h2q.425 0 .712.287.288.288.288.713t-.288.712Q22.425 13 22 13Zm-8-8q-.425 0-.712-.288Q11 4.425 11 4V2q0-.425.288-.713Q11.575 1 12 1t.713.287Q13 1.575 13 2v2q0 .425-.287.712Q12.425 5 12 5Zm0 18q-.425 0-.712-.288Q11 22.425 11 22v-2q0-.425.288-.712Q11.575 19 12 19t.713.288Q13 19.575 13 20v2q0 .425-.287.712Q12.425 23 12 23Z"
            }
            Self::Menu => "M3 18v-2h18v2Zm0-5v-2h18v2Zm0-5V6h18v2Z",
            Self::Search => {
                "M19.6 21 13.3 14.7q-.75.6-1.725.95Q10.6 16 9.5 16q-2.725 0-4.612-1.887Q3 12.225 3 9.5q0-2.725 1.888-4.613Q6.775 3 9.5 3t4.613 1.887Q16 6.775 16 9.5q0 1.1-.35 2.075-.35.975-.95 1.725l6.3 6.3ZM9.5 14q1.875 0 3.188-1.312Q14 11.375 14 9.5q0-1.875-1.312-3.188Q11.375 5 9.5 5 7.625 5 6.312 6.312 5 7.625 5 9.5q0 1.875 1.312 3.188Q7.625 14 9.5 14Z"
            }
            Self::Settings => {
                "m9.25 22-.4-3.2q-.325-.125-.612-.3-.288-.175-.563-.375L4.7 19.375l-2.75-4.75 2.575-1.95Q4.5 12.5 4.5 12.337v-.675q0-.162.025-.337L1.95 9.375l2.75-4.75 2.975 1.25q.275-.2.575-.375.3-.175.6-.3l.4-3.2h5.5l.4 3.2q.325.125.613.3.287.175.562.375l2.975-1.25 2.75 4.75-2.575 1.95q.025.175.025.337v.675q0 .163-.05.338l2.575 1.95-2.75 4.75-2.95-1.25q-.275.2-.575.375-.3.175-.6.3l-.4 3.2Zm2.8-6.5q1.45 0 2.475-1.025Q15.55 13.45 15.55 12q0-1.45-1.025-2.475Q13.5 8.5 12.05 8.5q-1.475 0-2.488 1.025Q8.55 10.55 8.55 12q0 1.45 1.012 2.475Q10.575 15.5 12.05 15.5Z"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Dense icon.
    Sm,
    /// Default icon.
    Md,
    /// Large icon.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Inline SVG icon. Decorative by default; pass a label through the hosting
/// control instead of the glyph.
pub fn Icon(
    /// Glyph to render.
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
) -> impl IntoView {
    view! {
        <svg
            class="md-icon"
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
            focusable="false"
            data-md-primitive="true"
            data-md-kind="icon"
            data-md-size=size.token()
        >
            <path d=icon.path()></path>
        </svg>
    }
}
