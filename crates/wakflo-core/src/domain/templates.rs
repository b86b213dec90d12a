//! Built-in templates for generated files.
//!
//! Placeholders use `{{ variable }}` or `{{ variable | transform }}`; see
//! [`crate::domain::naming::Transforms`] for the transform names. Variables
//! for resources come from [`crate::domain::ResourceMetadata::render_context`],
//! for integrations from [`crate::domain::IntegrationManifest::render_context`].

/// `actions/<file>.go`
pub const ACTION_SOURCE: &str = r#"package actions

import (
	"fmt"
	"github.com/wakflo/go-sdk/autoform"
	sdkcore "github.com/wakflo/go-sdk/core"
	"github.com/wakflo/go-sdk/integration"
)

type {{ file_name | camel }}ActionProps struct {
	Name string `json:"name"`
}

type {{ name | pascal }}Action struct{}

func (a *{{ name | pascal }}Action) Name() string {
	return "{{ name }}"
}

func (a *{{ name | pascal }}Action) Description() string {
	return "{{ description }}"
}

func (a *{{ name | pascal }}Action) GetType() sdkcore.ActionType {
	return {{ type_name }}
}

func (a *{{ name | pascal }}Action) Documentation() *integration.OperationDocumentation {
	return &integration.OperationDocumentation{
		Documentation: &{{ file_name | camel }}Docs,
	}
}

func (a *{{ name | pascal }}Action) Icon() *string {
	return nil
}

func (a *{{ name | pascal }}Action) Properties() map[string]*sdkcore.AutoFormSchema {
	return map[string]*sdkcore.AutoFormSchema{
		"name": autoform.NewShortTextField().
			SetLabel("Name").
			SetRequired(true).
			SetPlaceholder("Your name").
			Build(),
	}
}

func (a *{{ name | pascal }}Action) Perform(context integration.PerformContext) (sdkcore.JSON, error) {
	input, err := integration.InputToTypeSafely[{{ file_name | camel }}ActionProps](context.BaseContext)
	if err != nil {
		return nil, err
	}

	// implement action logic
	out := map[string]any{
		"message": fmt.Sprintf("Hello %s!", input.Name),
	}

	return out, nil
}

func (a *{{ name | pascal }}Action) Auth() *integration.Auth {
	return nil
}

func (a *{{ name | pascal }}Action) SampleData() sdkcore.JSON {
	return map[string]any{
		"message": "Hello World!",
	}
}

func (a *{{ name | pascal }}Action) Settings() sdkcore.ActionSettings {
	return sdkcore.ActionSettings{}
}

func New{{ name | pascal }}Action() integration.Action {
	return &{{ name | pascal }}Action{}
}
"#;

/// `triggers/<file>.go`
pub const TRIGGER_SOURCE: &str = r#"package triggers

import (
	"context"
	"fmt"
	"github.com/wakflo/go-sdk/autoform"
	sdkcore "github.com/wakflo/go-sdk/core"
	"github.com/wakflo/go-sdk/integration"
)

type {{ file_name | camel }}TriggerProps struct {
	Name string `json:"name"`
}

type {{ name | pascal }}Trigger struct{}

func (t *{{ name | pascal }}Trigger) Name() string {
	return "{{ name }}"
}

func (t *{{ name | pascal }}Trigger) Description() string {
	return "{{ description }}"
}

func (t *{{ name | pascal }}Trigger) GetType() sdkcore.TriggerType {
	return {{ type_name }}
}

func (t *{{ name | pascal }}Trigger) Documentation() *integration.OperationDocumentation {
	return &integration.OperationDocumentation{
		Documentation: &{{ file_name | camel }}Docs,
	}
}

func (t *{{ name | pascal }}Trigger) Icon() *string {
	return nil
}

func (t *{{ name | pascal }}Trigger) Properties() map[string]*sdkcore.AutoFormSchema {
	return map[string]*sdkcore.AutoFormSchema{
		"name": autoform.NewShortTextField().
			SetLabel("Name").
			SetRequired(true).
			SetPlaceholder("Your name").
			Build(),
	}
}

// Start initializes the {{ file_name | camel }}Trigger, required for event and webhook triggers in a lifecycle context.
func (t *{{ name | pascal }}Trigger) Start(ctx integration.LifecycleContext) error {
	// Required for event and webhook triggers
	return nil
}

// Stop shuts down the {{ file_name | camel }}Trigger, cleaning up resources and performing necessary teardown operations.
func (t *{{ name | pascal }}Trigger) Stop(ctx integration.LifecycleContext) error {
	return nil
}

// Execute runs the {{ file_name | camel }}Trigger and returns its JSON output. Required for polling triggers.
func (t *{{ name | pascal }}Trigger) Execute(ctx integration.ExecuteContext) (sdkcore.JSON, error) {
	input, err := integration.InputToTypeSafely[{{ file_name | camel }}TriggerProps](ctx.BaseContext)
	if err != nil {
		return nil, err
	}

	// implement trigger logic
	out := map[string]any{
		"message": fmt.Sprintf("Triggered by %s!", input.Name),
	}

	return out, nil
}

func (t *{{ name | pascal }}Trigger) Criteria(ctx context.Context) sdkcore.TriggerCriteria {
	return sdkcore.TriggerCriteria{}
}

func (t *{{ name | pascal }}Trigger) Auth() *integration.Auth {
	return nil
}

func (t *{{ name | pascal }}Trigger) SampleData() sdkcore.JSON {
	return map[string]any{
		"message": "Hello World!",
	}
}

func New{{ name | pascal }}Trigger() integration.Trigger {
	return &{{ name | pascal }}Trigger{}
}
"#;

/// `<folder>/<file>.md`
pub const RESOURCE_DOC: &str = r#"# {{ name }}

## Description

{{ description }}

## Details

- **Type**: {{ type_name }}
"#;

/// `lib.go`: the registry. Both literals start collapsed.
pub const LIB_GO: &str = r#"package {{ name | package }}

import (
	"github.com/wakflo/go-sdk/integration"
)

var Integration = integration.Register(New{{ name | pascal }}())

type {{ name | pascal }} struct{}

func (n *{{ name | pascal }}) Auth() *integration.Auth {
	return &integration.Auth{
		Required: false,
	}
}

func (n *{{ name | pascal }}) Triggers() []integration.Trigger {
	return []integration.Trigger{}
}

func (n *{{ name | pascal }}) Actions() []integration.Action {
	return []integration.Action{}
}

func New{{ name | pascal }}() integration.Integration {
	return &{{ name | pascal }}{}
}
"#;

/// `README.md` of a new integration. List variables are pre-rendered
/// Markdown bullet lists ending in a newline.
pub const README: &str = r#"# {{ name }} Integration

## Description

{{ description }}

{{ docs }}

## Categories

{{ categories_list }}
## Authors

{{ authors_list }}
"#;

/// Narrative document used when a project has no `README.md` yet.
pub fn fallback_readme(integration_name: &str) -> String {
    format!(
        "# {integration_name} Integration\n\n## Description\nThis integration provides various actions and triggers.\n\n"
    )
}
