//! Tests for built-in shape templates

#[cfg(test)]
mod tests {
    use trislice::shape::ShapeTemplate;

    // Tests template lookup by key
    #[test]
    fn test_from_key() {
        assert_eq!(ShapeTemplate::from_key("tri"), Some(ShapeTemplate::Triangle));
        assert_eq!(ShapeTemplate::from_key("chevron"), Some(ShapeTemplate::Chevron));
        assert_eq!(ShapeTemplate::from_key("hexagon"), None);
    }

    // Tests every instantiation is a fresh polygon
    // Verified by caching the instantiated polygon per template
    #[test]
    fn test_instantiate_fresh_ids() {
        let a = ShapeTemplate::Chevron.instantiate("red").unwrap();
        let b = ShapeTemplate::Chevron.instantiate("red").unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(a.canon(), b.canon());
        assert_eq!(a.fill(), "red");
    }

    // Tests template sizes in vertices and cells
    #[test]
    fn test_template_sizes() {
        let triangle = ShapeTemplate::Triangle.instantiate("x").unwrap();
        assert_eq!(triangle.verts().len(), 3);
        assert_eq!(triangle.tri_mask().len(), 1);

        let chevron = ShapeTemplate::Chevron.instantiate("x").unwrap();
        assert_eq!(chevron.verts().len(), 6);
        assert_eq!(chevron.tri_mask().len(), 10);
        assert_eq!(ShapeTemplate::Chevron.name(), "Chevron");
    }
}
