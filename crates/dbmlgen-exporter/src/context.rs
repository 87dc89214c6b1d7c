use dbmlgen_config::DbmlOptions;
use dbmlgen_core::{Datamodel, ModelDef};

/// Read-only state shared by the block renderers of one invocation.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub datamodel: &'a Datamodel,
    pub options: &'a DbmlOptions,
}

impl<'a> RenderContext<'a> {
    pub fn new(datamodel: &'a Datamodel, options: &'a DbmlOptions) -> Self {
        Self { datamodel, options }
    }

    /// Output name of `model`, honouring `mapToDbSchema`.
    pub fn model_name<'m>(&self, model: &'m ModelDef) -> &'m str {
        model.output_name(self.options.map_to_db_schema)
    }

    /// Output name of the model called `name`; unknown names are kept as is.
    pub fn model_name_of<'n>(&self, name: &'n str) -> &'n str
    where
        'a: 'n,
    {
        match self.datamodel.model(name) {
            Some(model) => self.model_name(model),
            None => name,
        }
    }
}
