use formwright_types::{
    Clock, DefaultLocalizer, LabelPosition, LayoutDefaults, Localizer, SystemClock, ViewBuilder,
};

/// Everything the renderer needs from its host.
pub struct RenderContext<'a> {
    pub view: &'a mut dyn ViewBuilder,
    pub clock: &'a dyn Clock,
    pub localizer: &'a dyn Localizer,
    pub defaults: LayoutDefaults,
}

impl<'a> RenderContext<'a> {
    /// A context using the system clock, built-in strings and default sizes.
    pub fn new(view: &'a mut dyn ViewBuilder) -> Self {
        Self {
            view,
            clock: &SystemClock,
            localizer: &DefaultLocalizer,
            defaults: LayoutDefaults::default(),
        }
    }

    pub fn with_clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_localizer(mut self, localizer: &'a dyn Localizer) -> Self {
        self.localizer = localizer;
        self
    }

    pub fn with_defaults(mut self, defaults: LayoutDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

/// Sizes and label placement of one field after cascading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub label_width: u32,
    pub input_width: u32,
    pub label_position: LabelPosition,
}
