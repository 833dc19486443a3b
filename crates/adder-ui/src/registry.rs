use crate::component::{Component, ComponentId};
use crate::error::UiError;
use crate::event::Callback;

/// Insertion-ordered set of live components.
///
/// Order is paint order (first registered is painted first) and hover
/// priority (first registered wins).
#[derive(Default)]
pub struct Registry {
    components: Vec<Box<dyn Component>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `component`. Returns its index.
    pub fn register(&mut self, component: Box<dyn Component>) -> Result<usize, UiError> {
        if let Some(index) = self.position(component.id().as_str()) {
            return Err(UiError::DuplicateRegistration { id: component.id().clone(), index });
        }
        log::debug!("registered `{}` at {}", component.id(), self.components.len());
        self.components.push(component);
        Ok(self.components.len() - 1)
    }

    /// Removes the component named `id` and hands it back.
    pub fn deregister(&mut self, id: &str) -> Result<Box<dyn Component>, UiError> {
        let index = self
            .position(id)
            .ok_or_else(|| UiError::NotRegistered { id: ComponentId::new(id) })?;
        log::debug!("deregistered `{id}` from {index}");
        Ok(self.components.remove(index))
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.components.iter().position(|c| c.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.components.iter().map(|c| c.id())
    }

    pub fn get(&self, id: &str) -> Option<&dyn Component> {
        self.components.iter().find(|c| c.id() == id).map(|c| &**c)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut dyn Component> {
        let component: &mut dyn Component =
            self.components.iter_mut().find(|c| c.id() == id)?.as_mut();
        Some(component)
    }

    /// Typed access. `None` if absent or not a `T`.
    pub fn get_as<T: Component>(&self, id: &str) -> Option<&T> {
        self.get(id)?.as_any().downcast_ref::<T>()
    }

    pub fn get_as_mut<T: Component>(&mut self, id: &str) -> Option<&mut T> {
        self.get_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    /// Handler for `name` on component `id`.
    pub fn lookup_event(&mut self, id: &str, name: &str) -> Result<&mut Callback, UiError> {
        let component = self
            .get_mut(id)
            .ok_or_else(|| UiError::NotRegistered { id: ComponentId::new(id) })?;
        let owner = component.id().clone();
        component
            .events_mut()
            .get_mut(name)
            .ok_or(UiError::UnknownEvent { id: owner, name: name.to_string() })
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Component> {
        self.components.iter().map(|c| &**c)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Component>> {
        self.components.iter_mut()
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> Option<&mut dyn Component> {
        let component: &mut dyn Component = self.components.get_mut(index)?.as_mut();
        Some(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adder_engine::text::BlockFont;

    use crate::widgets::label::Label;

    fn label(id: &str) -> Box<dyn Component> {
        let label = Label::builder(id, "hi", BlockFont::font(10.0))
            .build(&BlockFont)
            .expect("valid label");
        Box::new(label)
    }

    #[test]
    fn register_appends_in_order() {
        let mut reg = Registry::new();
        assert_eq!(reg.register(label("a")).unwrap(), 0);
        assert_eq!(reg.register(label("b")).unwrap(), 1);
        let ids: Vec<_> = reg.ids().map(|id| id.to_string()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn duplicate_registration_reports_existing_index() {
        let mut reg = Registry::new();
        reg.register(label("a")).unwrap();
        reg.register(label("b")).unwrap();
        match reg.register(label("b")) {
            Err(UiError::DuplicateRegistration { id, index }) => {
                assert_eq!(id, "b");
                assert_eq!(index, 1);
            }
            other => panic!("expected DuplicateRegistration, got {:?}", other.map(|_| ())),
        }
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn deregister_unknown_is_an_error() {
        let mut reg = Registry::new();
        assert!(matches!(reg.deregister("ghost"), Err(UiError::NotRegistered { .. })));
    }

    #[test]
    fn deregistered_component_can_come_back() {
        let mut reg = Registry::new();
        reg.register(label("a")).unwrap();
        reg.register(label("b")).unwrap();

        let a = reg.deregister("a").unwrap();
        assert!(!reg.contains("a"));
        assert_eq!(reg.position("b"), Some(0));

        assert_eq!(reg.register(a).unwrap(), 1);
        assert_eq!(reg.position("a"), Some(1));
    }

    #[test]
    fn typed_access_downcasts() {
        let mut reg = Registry::new();
        reg.register(label("a")).unwrap();
        assert!(reg.get_as::<Label>("a").is_some());
        assert!(reg.get_as::<crate::widgets::button::Button>("a").is_none());
        reg.get_as_mut::<Label>("a").unwrap().rotate(90.0);
    }

    #[test]
    fn lookup_event_distinguishes_reserved_and_unknown() {
        let mut reg = Registry::new();
        reg.register(label("a")).unwrap();
        assert!(reg.lookup_event("a", "onclick").is_ok());
        assert!(reg.lookup_event("a", "ondoubleclick").is_ok());
        assert!(matches!(
            reg.lookup_event("a", "onwheel"),
            Err(UiError::UnknownEvent { name, .. }) if name == "onwheel"
        ));
        assert!(matches!(reg.lookup_event("z", "onclick"), Err(UiError::NotRegistered { .. })));
    }
}
