//! Per-scope enablement of Open Graph and Twitter Card output.
//!
//! Each switch is decided on its own. Item scope consults the item first,
//! then the plugin defaults when the item delegates; navigation and site
//! scopes only have their own switches.
//!
//! | item switch | delegate | plugin switch | result      |
//! |-------------|----------|---------------|-------------|
//! | on          | any      | any           | `Own`       |
//! | off         | any      | any           | `Off`       |
//! | unset       | yes      | on            | `Inherited` |
//! | unset       | yes      | off           | `Off`       |
//! | unset       | no       | any           | `Off`       |

use crate::page::ScopeParams;

/// Outcome of one switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    /// Enabled by the scope itself.
    Own,
    /// Enabled through the plugin defaults.
    Inherited,
    Off,
}

impl Switch {
    #[inline]
    pub const fn is_on(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// A scope without a parent: its own value, off when unset.
    pub const fn own(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Own,
            _ => Self::Off,
        }
    }

    /// An item switch, see the module table.
    pub const fn item(own: Option<bool>, delegate: bool, plugin: bool) -> Self {
        match (own, delegate, plugin) {
            (Some(true), _, _) => Self::Own,
            (Some(false), _, _) => Self::Off,
            (None, true, true) => Self::Inherited,
            (None, true, false) | (None, false, _) => Self::Off,
        }
    }
}

/// Which fallback chain the item scope's fields follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTier {
    /// The item switched a family on itself: its overrides, then its content.
    Explicit,
    /// The item states nothing and borrows the plugin switches: content only.
    Delegated,
    /// The item states a switch but only the plugin's is on: overrides,
    /// then plugin defaults, then content.
    Mixed,
}

/// Both switches of one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enablement {
    pub open_graph: Switch,
    pub twitter_card: Switch,
}

impl Enablement {
    /// Switches of a navigation entry or the site (plugin) scope.
    pub const fn own(open_graph: Option<bool>, twitter_card: Option<bool>) -> Self {
        Self {
            open_graph: Switch::own(open_graph),
            twitter_card: Switch::own(twitter_card),
        }
    }

    /// Switches of a content item.
    pub fn item(params: &ScopeParams, delegate: bool, plugin_og: bool, plugin_tw: bool) -> Self {
        Self {
            open_graph: Switch::item(params.meta_open_graph, delegate, plugin_og),
            twitter_card: Switch::item(params.meta_twitter_card, delegate, plugin_tw),
        }
    }

    #[inline]
    pub const fn open_graph(&self) -> bool {
        self.open_graph.is_on()
    }

    #[inline]
    pub const fn twitter_card(&self) -> bool {
        self.twitter_card.is_on()
    }

    /// A tag set is produced only when at least one family is on.
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.open_graph() || self.twitter_card()
    }

    /// Field chain for an enabled item scope; `None` when disabled.
    pub fn item_tier(&self, params: &ScopeParams) -> Option<ItemTier> {
        if !self.is_enabled() {
            return None;
        }
        let explicit = self.open_graph == Switch::Own || self.twitter_card == Switch::Own;
        Some(if explicit {
            ItemTier::Explicit
        } else if !params.sets_any_flag() {
            ItemTier::Delegated
        } else {
            ItemTier::Mixed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod item_switch {
        use super::*;

        #[test]
        fn own_on_wins_regardless() {
            for delegate in [true, false] {
                for plugin in [true, false] {
                    assert_eq!(Switch::item(Some(true), delegate, plugin), Switch::Own);
                }
            }
        }

        #[test]
        fn own_off_wins_regardless() {
            for delegate in [true, false] {
                for plugin in [true, false] {
                    assert_eq!(Switch::item(Some(false), delegate, plugin), Switch::Off);
                }
            }
        }

        #[test]
        fn unset_delegating_to_enabled_plugin() {
            assert_eq!(Switch::item(None, true, true), Switch::Inherited);
        }

        #[test]
        fn unset_delegating_to_disabled_plugin() {
            assert_eq!(Switch::item(None, true, false), Switch::Off);
        }

        #[test]
        fn unset_without_delegation_ignores_plugin() {
            assert_eq!(Switch::item(None, false, true), Switch::Off);
            assert_eq!(Switch::item(None, false, false), Switch::Off);
        }
    }

    #[test]
    fn own_switch() {
        assert_eq!(Switch::own(Some(true)), Switch::Own);
        assert_eq!(Switch::own(Some(false)), Switch::Off);
        assert_eq!(Switch::own(None), Switch::Off);
    }

    fn params(og: Option<bool>, tw: Option<bool>) -> ScopeParams {
        ScopeParams {
            meta_open_graph: og,
            meta_twitter_card: tw,
            ..Default::default()
        }
    }

    #[test]
    fn disabled_scope_has_no_tier() {
        let p = params(None, None);
        let e = Enablement::item(&p, false, true, true);
        assert!(!e.is_enabled());
        assert_eq!(e.item_tier(&p), None);

        let e = Enablement::own(Some(false), None);
        assert!(!e.is_enabled());
    }

    #[test]
    fn explicit_tier() {
        let p = params(Some(true), None);
        let e = Enablement::item(&p, true, false, false);
        assert!(e.open_graph());
        assert!(!e.twitter_card());
        assert_eq!(e.item_tier(&p), Some(ItemTier::Explicit));
    }

    #[test]
    fn delegated_tier() {
        let p = params(None, None);
        let e = Enablement::item(&p, true, true, false);
        assert_eq!(e.open_graph, Switch::Inherited);
        assert_eq!(e.twitter_card, Switch::Off);
        assert_eq!(e.item_tier(&p), Some(ItemTier::Delegated));
    }

    /// The item sets Twitter Card on and leaves Open Graph unset: each switch
    /// is decided independently, so Open Graph still follows the plugin.
    #[test]
    fn single_flag_set_other_inherits_independently() {
        let p = params(None, Some(true));

        let e = Enablement::item(&p, true, true, false);
        assert_eq!(e.twitter_card, Switch::Own);
        assert_eq!(e.open_graph, Switch::Inherited);
        assert_eq!(e.item_tier(&p), Some(ItemTier::Explicit));

        let e = Enablement::item(&p, true, false, true);
        assert_eq!(e.open_graph, Switch::Off);

        let e = Enablement::item(&p, false, true, true);
        assert_eq!(e.open_graph, Switch::Off);
        assert_eq!(e.twitter_card, Switch::Own);
    }

    #[test]
    fn mixed_tier() {
        // Item turns Open Graph off but lets Twitter Card follow the plugin.
        let p = params(Some(false), None);
        let e = Enablement::item(&p, true, true, true);
        assert_eq!(e.open_graph, Switch::Off);
        assert_eq!(e.twitter_card, Switch::Inherited);
        assert_eq!(e.item_tier(&p), Some(ItemTier::Mixed));
    }
}
