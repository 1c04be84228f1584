/// Integration tests for resource dictionaries and name generation
use pdf_resources::{
    ObjectStore, PdfDictionary, PdfErrorKind, PdfName, PdfReference, PdfResources, PdfValue,
    ResourceType, ResourcesConfig,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn image_store(count: usize) -> (ObjectStore, Vec<PdfReference>) {
    let mut store = ObjectStore::new();
    let refs = (0..count)
        .map(|i| store.add(PdfValue::Integer(i as i64)).unwrap())
        .collect();
    (store, refs)
}

#[cfg(test)]
mod resources_tests {
    use super::*;

    #[test]
    fn test_xobject_names_on_empty_table() {
        let (mut store, refs) = image_store(2);
        let mut resources = PdfResources::new();
        let first = resources.add_resource(ResourceType::XObject, refs[0], &mut store);
        assert_eq!(first.unwrap(), "XOb0");
        let second = resources.add_resource(ResourceType::XObject, refs[1], &mut store);
        assert_eq!(second.unwrap(), "XOb1");
    }

    #[test]
    fn test_font_collision_skips_to_next_free_name() {
        let mut store = ObjectStore::new();
        let mut resources = PdfResources::new();
        for _ in 0..3 {
            resources.add_resource(ResourceType::Font, PdfValue::Null, &mut store).unwrap();
        }
        assert_eq!(resources.current_id(ResourceType::Font), 2);

        resources
            .add_named_resource(
                ResourceType::Font,
                PdfName::from_static("Ft3"),
                PdfReference::new(40, 0),
                &mut store,
            )
            .unwrap();
        let next = resources.add_resource(ResourceType::Font, PdfValue::Null, &mut store);
        assert_eq!(next.unwrap(), "Ft4");
        assert_eq!(
            resources.find_resource(ResourceType::Font, "Ft3", &store),
            Some(&PdfValue::Reference(PdfReference::new(40, 0)))
        );
    }

    #[test]
    fn test_missing_category_lookup_is_none() {
        let store = ObjectStore::new();
        let resources = PdfResources::new();
        assert!(resources.get_resource(ResourceType::Font, "F1", &store).is_none());
        assert!(resources.find_resource(ResourceType::Font, "F1", &store).is_none());
        assert_eq!(resources.resources(ResourceType::Font, &store).count(), 0);
    }

    #[test]
    fn test_named_resource_overwrites() {
        let (mut store, refs) = image_store(2);
        let mut resources = PdfResources::new();
        let key = PdfName::from_static("Im1");
        for image in refs {
            resources
                .add_named_resource(ResourceType::XObject, key.clone(), image, &mut store)
                .unwrap();
        }

        assert_eq!(resources.resources(ResourceType::XObject, &store).count(), 1);
        assert_eq!(
            resources.get_resource(ResourceType::XObject, &key, &store),
            Some(&PdfValue::Integer(1))
        );
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut store = ObjectStore::new();
        let mut resources = PdfResources::new();
        resources.remove_resource(ResourceType::Pattern, "Ptrn0", &mut store);
        resources.remove_resources(ResourceType::Pattern);
        assert!(resources.dictionary().is_empty());

        let name = resources
            .add_resource(ResourceType::Pattern, PdfValue::Null, &mut store)
            .unwrap();
        resources.remove_resource(ResourceType::Pattern, "Missing", &mut store);
        assert!(resources.find_resource(ResourceType::Pattern, &name, &store).is_some());
        resources.remove_resource(ResourceType::Pattern, &name, &mut store);
        assert!(resources.find_resource(ResourceType::Pattern, &name, &store).is_none());
        assert!(resources.has_resources(ResourceType::Pattern, &store));
    }

    #[test]
    fn test_loaded_dictionary_with_existing_names() {
        let mut fonts = PdfDictionary::new();
        fonts.insert(PdfName::from_static("Ft0"), PdfReference::new(7, 0));
        fonts.insert(PdfName::from_static("F1"), PdfReference::new(8, 0));
        let mut dict = PdfDictionary::new();
        dict.insert(PdfName::from_static("Font"), fonts);

        let mut store = ObjectStore::new();
        store.insert(PdfReference::new(8, 0).id(), PdfName::from_static("Helvetica"));

        let mut resources = PdfResources::try_from_value(PdfValue::Dictionary(dict)).unwrap();
        assert_eq!(
            resources.get_resource(ResourceType::Font, "F1", &store),
            Some(&PdfValue::Name(PdfName::from_static("Helvetica")))
        );
        let next = resources.add_resource(ResourceType::Font, PdfValue::Null, &mut store);
        assert_eq!(next.unwrap(), "Ft1");

        let keys: Vec<&str> = resources
            .resources(ResourceType::Font, &store)
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["Ft0", "F1", "Ft1"]);
    }

    #[test]
    fn test_indirect_category_dictionary_is_followed() {
        let mut store = ObjectStore::new();
        let shading = store.add(PdfValue::Integer(5)).unwrap();
        let mut shadings = PdfDictionary::new();
        shadings.insert(PdfName::from_static("Sh1"), shading);
        let category = store.add(shadings).unwrap();

        let mut dict = PdfDictionary::new();
        dict.insert(PdfName::from_static("Shading"), category);
        let resources = PdfResources::from_dictionary(dict);

        assert_eq!(
            resources.get_resource(ResourceType::Shading, "Sh1", &store),
            Some(&PdfValue::Integer(5))
        );
        assert!(resources.has_resources(ResourceType::Shading, &store));
        assert_eq!(
            resources.find_resource(ResourceType::Shading, "Sh1", &store),
            Some(&PdfValue::Reference(shading))
        );
        assert_eq!(resources.resources(ResourceType::Shading, &store).count(), 1);
    }

    #[test]
    fn test_allocation_into_indirect_category_keeps_existing_names() {
        let mut store = ObjectStore::new();
        let mut fonts = PdfDictionary::new();
        fonts.insert(PdfName::from_static("Ft0"), PdfReference::new(50, 0));
        let category = store.add(fonts).unwrap();

        let mut dict = PdfDictionary::new();
        dict.insert(PdfName::from_static("Font"), category);
        let mut resources = PdfResources::from_dictionary(dict);

        let name = resources
            .add_resource(ResourceType::Font, PdfValue::Null, &mut store)
            .unwrap();
        assert_ne!(name, "Ft0");
        assert_eq!(resources.dictionary().to_string(), "<</Font 1 0 R>>");
        assert_eq!(
            resources.get_resource(ResourceType::Font, "Ft0", &store),
            None,
            "object 50 is not in the store"
        );
        assert_eq!(
            resources.find_resource(ResourceType::Font, "Ft0", &store),
            Some(&PdfValue::Reference(PdfReference::new(50, 0)))
        );
        assert_eq!(
            resources.find_resource(ResourceType::Font, &name, &store),
            Some(&PdfValue::Null)
        );
    }

    #[test]
    fn test_untyped_categories() {
        let mut store = ObjectStore::new();
        let mut resources = PdfResources::new();
        let category = PdfName::from_static("Custom");
        resources
            .add_resource_to(&category, PdfName::from_static("K"), PdfValue::Integer(9), &mut store)
            .unwrap();

        assert_eq!(
            resources.get_resource_in(&category, "K", &store),
            Some(&PdfValue::Integer(9))
        );
        assert_eq!(resources.resources_in("Custom", &store).count(), 1);
        resources.remove_resource_in("Custom", "K", &mut store);
        assert_eq!(resources.resources_in("Custom", &store).count(), 0);
        resources.remove_resources_in(&category);
        assert!(resources.dictionary().is_empty());
    }

    #[test]
    fn test_canvas_initialization() {
        let resources = PdfResources::for_canvas();
        assert_eq!(
            resources.dictionary().to_string(),
            "<</ProcSet [/PDF /Text /ImageB /ImageC /ImageI]>>"
        );

        let config = ResourcesConfig::from_toml_str("proc_set = [\"PDF\"]").unwrap();
        let resources = PdfResources::for_canvas_with(&config);
        assert_eq!(resources.dictionary().to_string(), "<</ProcSet [/PDF]>>");
    }

    #[test]
    fn test_category_conversion_errors() {
        assert_eq!(
            ResourceType::try_from(0u8).unwrap_err().kind(),
            PdfErrorKind::InvalidEnumValue
        );
        assert_eq!(ResourceType::try_from(6u8).unwrap(), ResourceType::Font);
    }

    proptest! {
        #[test]
        fn prop_allocated_names_never_collide(
            preset in proptest::collection::vec(0u32..20, 0..12),
            allocations in 1usize..24,
        ) {
            let mut store = ObjectStore::new();
            let mut resources = PdfResources::new();
            for id in &preset {
                let key = PdfName::from_utf8(&format!("XOb{}", id)).unwrap();
                resources
                    .add_named_resource(ResourceType::XObject, key, PdfValue::Null, &mut store)
                    .unwrap();
            }

            let mut seen: HashSet<PdfName> = resources
                .resources(ResourceType::XObject, &store)
                .map(|(k, _)| k.clone())
                .collect();
            for _ in 0..allocations {
                let name = resources
                    .add_resource(ResourceType::XObject, PdfValue::Null, &mut store)
                    .unwrap();
                prop_assert!(seen.insert(name));
            }
        }
    }
}
