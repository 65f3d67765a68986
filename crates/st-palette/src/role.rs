//! The closed set of color roles and their static title table.
//!
//! Every role the generator produces has exactly one row in [`TABLE`]:
//! its camelCase identifier, the title the editor shows next to it, and the
//! CSS custom property it is written to. Generation, serialization and
//! lookups by variable name all read this one table, so a role can't exist
//! without a title.

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A named slot in the design system, consumed by the styling layer.
///
/// Variants are declared in the editor's display order; `Role::ALL` and
/// [`TABLE`] follow the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,

    // ── Feature roles (trading UI accents) ─────────────────────
    Unlocked,
    Long,
    LongForeground,
    LongInside,
    Short,
    ShortForeground,
    ShortInside,
    Tp,
    TpForeground,
    TpInside,
    TpLight,
    Sl,
    SlForeground,
    SlInside,
    ChartBg,
}

/// One row of the static role table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleInfo {
    pub role: Role,
    /// camelCase identifier used inside the generator.
    pub name: &'static str,
    /// Human-readable label.
    pub title: &'static str,
    /// CSS custom property name, `--` prefixed and hyphenated.
    pub variable: &'static str,
}

const fn row(
    role: Role,
    name: &'static str,
    title: &'static str,
    variable: &'static str,
) -> RoleInfo {
    RoleInfo { role, name, title, variable }
}

/// The static role table, in display order.
pub const TABLE: [RoleInfo; Role::COUNT] = [
    row(Role::Primary, "primary", "Primary", "--primary"),
    row(Role::PrimaryForeground, "primaryForeground", "Primary Foreground", "--primary-foreground"),
    row(Role::Secondary, "secondary", "Secondary", "--secondary"),
    row(Role::SecondaryForeground, "secondaryForeground", "Secondary Foreground", "--secondary-foreground"),
    row(Role::Background, "background", "Background", "--background"),
    row(Role::Foreground, "foreground", "Foreground", "--foreground"),
    row(Role::Card, "card", "Card", "--card"),
    row(Role::CardForeground, "cardForeground", "Card Foreground", "--card-foreground"),
    row(Role::Popover, "popover", "Popover", "--popover"),
    row(Role::PopoverForeground, "popoverForeground", "Popover Foreground", "--popover-foreground"),
    row(Role::Muted, "muted", "Muted", "--muted"),
    row(Role::MutedForeground, "mutedForeground", "Muted Foreground", "--muted-foreground"),
    row(Role::Accent, "accent", "Accent", "--accent"),
    row(Role::AccentForeground, "accentForeground", "Accent Foreground", "--accent-foreground"),
    row(Role::Destructive, "destructive", "Destructive", "--destructive"),
    row(Role::DestructiveForeground, "destructiveForeground", "Destructive Foreground", "--destructive-foreground"),
    row(Role::Border, "border", "Border", "--border"),
    row(Role::Input, "input", "Input", "--input"),
    row(Role::Ring, "ring", "Ring", "--ring"),
    row(Role::Unlocked, "unlocked", "Unlocked", "--unlocked"),
    row(Role::Long, "long", "Long", "--long"),
    row(Role::LongForeground, "longForeground", "Long Foreground", "--long-foreground"),
    row(Role::LongInside, "longInside", "Long Inside", "--long-inside"),
    row(Role::Short, "short", "Short", "--short"),
    row(Role::ShortForeground, "shortForeground", "Short Foreground", "--short-foreground"),
    row(Role::ShortInside, "shortInside", "Short Inside", "--short-inside"),
    row(Role::Tp, "tp", "TP", "--tp"),
    row(Role::TpForeground, "tpForeground", "TP Foreground", "--tp-foreground"),
    row(Role::TpInside, "tpInside", "TP Inside", "--tp-inside"),
    row(Role::TpLight, "tpLight", "TP Light", "--tp-light"),
    row(Role::Sl, "sl", "SL", "--sl"),
    row(Role::SlForeground, "slForeground", "SL Foreground", "--sl-foreground"),
    row(Role::SlInside, "slInside", "SL Inside", "--sl-inside"),
    row(Role::ChartBg, "chartBg", "Chart Background", "--chart-bg"),
];

const fn collect_roles() -> [Role; Role::COUNT] {
    let mut roles = [Role::Primary; Role::COUNT];
    let mut i = 0;
    while i < Role::COUNT {
        roles[i] = TABLE[i].role;
        i += 1;
    }
    roles
}

impl Role {
    /// Number of roles in a palette.
    pub const COUNT: usize = 34;

    /// Every role, in display order.
    pub const ALL: [Self; Self::COUNT] = collect_roles();

    /// This role's row in the static table.
    #[must_use]
    pub const fn info(self) -> RoleInfo {
        TABLE[self as usize]
    }

    /// camelCase identifier, e.g. `"primaryForeground"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    /// Display title, e.g. `"Primary Foreground"`.
    #[must_use]
    pub const fn title(self) -> &'static str {
        self.info().title
    }

    /// CSS custom property, e.g. `"--primary-foreground"`.
    #[must_use]
    pub const fn variable(self) -> &'static str {
        self.info().variable
    }

    /// Whether this is one of the trading-UI feature roles rather than a
    /// base shadcn role.
    #[must_use]
    pub const fn is_feature(self) -> bool {
        self as usize >= Self::Unlocked as usize
    }

    /// Look a role up by its camelCase identifier.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        TABLE.iter().find(|info| info.name == name).map(|info| info.role)
    }

    /// Look a role up by its CSS custom property name.
    #[must_use]
    pub fn from_variable(variable: &str) -> Option<Self> {
        TABLE.iter().find(|info| info.variable == variable).map(|info| info.role)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Title registered for a CSS variable, or `None` if the variable is not a
/// known role.
#[must_use]
pub fn title_for_variable(variable: &str) -> Option<&'static str> {
    Role::from_variable(variable).map(Role::title)
}

/// Convert a camelCase identifier to its CSS custom property name:
/// hyphenate every lowercase→uppercase boundary, lowercase, prefix `--`.
#[must_use]
pub fn css_variable(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    out.push_str("--");
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() && prev_lower {
            out.push('-');
        }
        prev_lower = c.is_ascii_lowercase();
        out.push(c.to_ascii_lowercase());
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
