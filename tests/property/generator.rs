use mock_class::{ClassDefinition, MockGenerator, CONSTRUCTOR_KEY};
use proptest::prelude::*;

use crate::utils::{json_value, method_names};

fn class_with(names: &[String], inherited: &[String]) -> ClassDefinition {
    let own = names
        .iter()
        .fold(ClassDefinition::new("Generated").constructor(), |class, name| {
            class.method(name.clone())
        });
    inherited
        .iter()
        .fold(own, |class, name| class.inherited(format!("inherited_{}", name)))
}

proptest! {
    #[test]
    fn test_mock_exposes_exactly_the_own_methods(
        names in method_names(),
        parents in method_names(),
    ) {
        let mock = MockGenerator::new(class_with(&names, &parents)).get_mock().unwrap();

        let methods: Vec<String> = mock
            .class_definition
            .method_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        prop_assert_eq!(&methods, &names);

        let keys: Vec<&str> = mock.recorders.keys().collect();
        prop_assert_eq!(keys.len(), names.len() + 1);
        prop_assert_eq!(keys[0], CONSTRUCTOR_KEY);
    }

    #[test]
    fn test_call_records_arguments_in_order(
        args in prop::collection::vec(json_value(), 0..6),
    ) {
        let mock = MockGenerator::new(ClassDefinition::new("Echo").method("echo"))
            .get_mock()
            .unwrap();
        let instance = mock.class_definition.construct(vec![]);

        instance.call("echo", args.clone()).unwrap();

        let calls = mock.recorders["echo"].calls();
        prop_assert_eq!(calls.len(), 1);
        prop_assert_eq!(&calls[0], &args);
    }

    #[test]
    fn test_construction_records_arguments_in_order(
        args in prop::collection::vec(json_value(), 0..6),
    ) {
        let mock = MockGenerator::new(ClassDefinition::new("Echo").method("echo"))
            .get_mock()
            .unwrap();

        mock.class_definition.construct(args.clone());

        prop_assert_eq!(mock.recorders.constructor().calls(), vec![args]);
        prop_assert!(!mock.recorders["echo"].was_called());
    }

    #[test]
    fn test_installed_behavior_result_is_returned(value in json_value()) {
        let mock = MockGenerator::new(ClassDefinition::new("Echo").method("echo"))
            .get_mock()
            .unwrap();
        mock.recorders["echo"].returns(value.clone());

        let result = mock.class_definition.construct(vec![]).call("echo", vec![]).unwrap();
        prop_assert_eq!(result, Some(value));
    }
}
