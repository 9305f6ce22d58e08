use schedule::DepthSource;

/// The resource constraint that gates deletion. At most one is active.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Budget {
    /// No constraint: delete every schedule candidate and nothing else.
    #[default]
    Unlimited,
    /// Keep at most this many records.
    Count(u64),
    /// Keep at most this many bytes.
    TotalSize(u64),
    /// Delete until the filesystem has more than this many bytes available.
    FreeSpace(u64),
    /// Delete every surviving record older than this many days.
    MaxAge(u64),
}

impl Budget {
    /// The budget's contribution to the schedule depth.
    #[must_use]
    pub const fn depth_source(self) -> DepthSource {
        match self {
            Self::Count(count) => DepthSource::Count(count),
            Self::TotalSize(bytes) => DepthSource::Size(bytes),
            Self::MaxAge(days) => DepthSource::Age(days),
            Self::Unlimited | Self::FreeSpace(_) => DepthSource::Unspecified,
        }
    }

    /// Whether deletion stops once a threshold is reached.
    #[must_use]
    pub const fn is_gating(self) -> bool {
        matches!(self, Self::Count(_) | Self::TotalSize(_) | Self::FreeSpace(_))
    }
}

/// A budget together with its two modifiers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RetentionPolicy {
    budget: Budget,
    force: bool,
    keep_files: bool,
}

impl RetentionPolicy {
    /// Creates a policy with both modifiers off.
    #[must_use]
    pub const fn new(budget: Budget) -> Self {
        Self {
            budget,
            force: false,
            keep_files: false,
        }
    }

    /// Delete every candidate even when the budget is already met.
    #[must_use]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Never delete scheduled records, even when the budget stays unmet.
    #[must_use]
    pub const fn keep_files(mut self, keep_files: bool) -> Self {
        self.keep_files = keep_files;
        self
    }

    /// The configured budget.
    #[must_use]
    pub const fn budget(&self) -> Budget {
        self.budget
    }

    /// Whether `force` is set.
    #[must_use]
    pub const fn forced(&self) -> bool {
        self.force
    }

    /// Whether `keep_files` is set.
    #[must_use]
    pub const fn keeps_files(&self) -> bool {
        self.keep_files
    }
}
