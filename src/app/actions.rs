use super::state::Screen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextScreen,
    PrevScreen,
    SetScreen(Screen),

    ListUp,
    ListDown,
    GoTop,
    GoBottom,

    // Color count slider
    CountUp,
    CountDown,
    CountUpLarge,
    CountDownLarge,

    ToggleOpacity,
    ToggleMax,

    Generate,
    SavePalette,
    ClearPalette,

    // Saved palettes
    ToggleMark,
    DeleteSelected,

    Resize,
}
