//! Lookup table from log types to their configured type loggers

use super::error::{LoggerError, Result};
use super::log_type::{CustomTag, LogType, Preset};
use super::style::{Style, StyleList};
use super::type_logger::{StyledType, TypeLogger};
use std::collections::HashMap;

/// Preset and custom type loggers, owned by a single [`Logger`](super::Logger).
///
/// Custom registration never overwrites: a name that matches a preset
/// (case-insensitive) or an earlier registration is rejected.
pub struct TypeRegistry {
    presets: [StyledType; 7],
    custom: HashMap<CustomTag, Box<dyn TypeLogger>>,
    order: Vec<CustomTag>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            presets: Preset::ALL.map(|preset| {
                StyledType::new(preset.default_styles()).with_stream(preset.default_stream())
            }),
            custom: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Replace a preset's style list. The preset keeps its stream; an empty
    /// list is stored as `[normal]`.
    pub fn set_preset_styles(&mut self, preset: Preset, styles: StyleList) {
        let styles = if styles.is_empty() {
            vec![Style::Normal]
        } else {
            styles
        };
        self.presets[preset.index()] = StyledType::new(styles).with_stream(preset.default_stream());
    }

    /// Build a type logger with `factory` and store it under `tag`.
    ///
    /// The factory is not invoked when the name is already taken.
    pub fn register<F, L>(
        &mut self,
        tag: CustomTag,
        styles: StyleList,
        factory: F,
    ) -> Result<&dyn TypeLogger>
    where
        F: FnOnce(StyleList) -> L,
        L: TypeLogger + 'static,
    {
        if self.is_taken(&tag) {
            return Err(LoggerError::duplicate_type(tag.to_string()));
        }
        self.order.push(tag.clone());
        let logger = self.custom.entry(tag).or_insert(Box::new(factory(styles)));
        Ok(&**logger)
    }

    fn is_taken(&self, tag: &CustomTag) -> bool {
        let shadows_preset = match tag {
            CustomTag::Name(name) => name.parse::<Preset>().is_ok(),
            CustomTag::Token(_) => false,
        };
        shadows_preset || self.custom.contains_key(tag)
    }

    pub fn get(&self, log_type: &LogType) -> Result<&dyn TypeLogger> {
        match log_type {
            LogType::Preset(preset) => Ok(&self.presets[preset.index()]),
            LogType::Custom(tag) => self
                .custom
                .get(tag)
                .map(|logger| &**logger)
                .ok_or_else(|| LoggerError::unknown_type(tag.to_string())),
        }
    }

    pub fn resolve(&self, log_type: &LogType) -> Result<StyleList> {
        self.get(log_type).map(|logger| logger.styles().to_vec())
    }

    pub fn contains(&self, log_type: &LogType) -> bool {
        self.get(log_type).is_ok()
    }

    /// Presets first, then custom types in registration order
    pub fn types(&self) -> impl Iterator<Item = LogType> + '_ {
        Preset::ALL
            .into_iter()
            .map(LogType::Preset)
            .chain(self.order.iter().cloned().map(LogType::Custom))
    }

}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_type::{Stream, TypeToken};

    #[test]
    fn test_every_preset_resolves_non_empty() {
        let registry = TypeRegistry::new();
        for preset in Preset::ALL {
            let styles = registry.resolve(&LogType::Preset(preset)).unwrap();
            assert!(!styles.is_empty());
        }
    }

    #[test]
    fn test_unknown_type() {
        let registry = TypeRegistry::new();
        let err = registry.resolve(&LogType::from("nonexistent")).unwrap_err();
        assert!(matches!(err, LoggerError::UnknownType { ref name } if name == "nonexistent"));
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = TypeRegistry::new();
        let styles = Style::parse_list(["yellow", "bold"]).unwrap();
        registry
            .register("highlight".into(), styles.clone(), StyledType::new)
            .unwrap();

        assert_eq!(registry.resolve(&LogType::from("highlight")).unwrap(), styles);
        assert_eq!(registry.types().count(), Preset::ALL.len() + 1);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = TypeRegistry::new();
        registry
            .register("highlight".into(), Vec::new(), StyledType::new)
            .unwrap();

        let mut invoked = false;
        let result = registry.register("highlight".into(), Vec::new(), |styles| {
            invoked = true;
            StyledType::new(styles)
        });
        assert!(matches!(result, Err(LoggerError::DuplicateType { .. })));
        assert!(!invoked, "factory must not run on collision");
    }

    #[test]
    fn test_preset_names_are_reserved() {
        let mut registry = TypeRegistry::new();
        for name in ["info", "ERROR", "Plain"] {
            let result = registry.register(CustomTag::from(name), Vec::new(), StyledType::new);
            assert!(matches!(result, Err(LoggerError::DuplicateType { .. })));
        }
    }

    #[test]
    fn test_tokens_never_collide() {
        let mut registry = TypeRegistry::new();
        let first = TypeToken::with_description("audit");
        let second = TypeToken::with_description("audit");
        registry
            .register((&first).into(), Vec::new(), StyledType::new)
            .unwrap();
        registry
            .register((&second).into(), Vec::new(), |styles| {
                StyledType::new(styles).with_stream(Stream::Stderr)
            })
            .unwrap();

        assert_eq!(registry.get(&first.into()).unwrap().stream(), Stream::Stdout);
        assert_eq!(registry.get(&second.into()).unwrap().stream(), Stream::Stderr);
    }

    #[test]
    fn test_preset_override_keeps_stream() {
        let mut registry = TypeRegistry::new();
        registry.set_preset_styles(Preset::Warn, Style::parse_list(["on_yellow"]).unwrap());
        registry.set_preset_styles(Preset::Info, Vec::new());

        let warn = registry.get(&Preset::Warn.into()).unwrap();
        assert_eq!(warn.stream(), Stream::Stderr);
        assert_eq!(warn.styles()[0].to_string(), "on_yellow");
        assert_eq!(
            registry.resolve(&Preset::Info.into()).unwrap(),
            vec![Style::Normal]
        );
    }

    #[test]
    fn test_types_in_order() {
        let mut registry = TypeRegistry::new();
        registry.register("zeta".into(), Vec::new(), StyledType::new).unwrap();
        registry.register("alpha".into(), Vec::new(), StyledType::new).unwrap();

        let names: Vec<String> = registry.types().map(|t| t.to_string()).collect();
        assert_eq!(
            names,
            vec!["info", "warn", "error", "debug", "success", "failure", "plain", "zeta", "alpha"]
        );
    }
}
