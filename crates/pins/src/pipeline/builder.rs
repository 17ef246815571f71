use crate::{
    algorithms::{ExternalContourExtractor, MorphologicalClose, MorphologicalOpen},
    pipeline::{DEFAULT_MIN_AREA, DEFAULT_PADDING, Pipeline},
    traits::MaskPreprocessor,
};

/// Builder for creating extraction pipelines with a fluent API
pub struct PipelineBuilder {
    preprocessors: Option<Vec<Box<dyn MaskPreprocessor>>>,
    padding: u32,
    min_area: f64,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            preprocessors: None,
            padding: DEFAULT_PADDING,
            min_area: DEFAULT_MIN_AREA,
        }
    }

    /// Add a mask preprocessor.
    ///
    /// The first call replaces the default close-then-open cleanup.
    pub fn add_preprocessor<P>(mut self, preprocessor: P) -> Self
    where
        P: MaskPreprocessor + 'static,
    {
        self.preprocessors
            .get_or_insert_with(Vec::new)
            .push(Box::new(preprocessor));
        self
    }

    /// Skip mask cleanup entirely
    pub fn without_preprocessing(mut self) -> Self {
        self.preprocessors = Some(Vec::new());
        self
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    /// Build the pipeline with default components if not specified
    pub fn build(self) -> Pipeline {
        let preprocessors = self.preprocessors.unwrap_or_else(|| {
            vec![
                Box::new(MorphologicalClose::default()) as Box<dyn MaskPreprocessor>,
                Box::new(MorphologicalOpen::default()),
            ]
        });

        Pipeline::new(
            preprocessors,
            Box::new(ExternalContourExtractor),
            self.padding,
            self.min_area,
        )
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
