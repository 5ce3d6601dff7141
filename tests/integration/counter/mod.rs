use surface_mvu::{Component, Effect, Emitter};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CounterEvent {
    Increment,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CounterModel {
    pub(crate) count: i32,
}

pub(crate) struct CounterProps {
    pub(crate) count: i32,
    pub(crate) on_increment: Box<dyn Fn() + Send>,
}

pub(crate) struct CounterLogic {
    pub(crate) mount_effects: Box<dyn MountEffectsDependency + Send>,
    pub(crate) effects: Box<dyn EffectsDependency + Send>,
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait MountEffectsDependency {
    fn on_mount(&self) -> Effect<CounterEvent>;
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait EffectsDependency {
    fn on_increment_side_effect(&self) -> Effect<CounterEvent>;
}

impl Component<CounterEvent, CounterModel, CounterProps> for CounterLogic {
    fn init(&self, model: CounterModel) -> (CounterModel, Effect<CounterEvent>) {
        let effect = self.mount_effects.on_mount();
        (model, effect)
    }

    fn update(
        &self,
        event: CounterEvent,
        model: &CounterModel,
    ) -> (CounterModel, Effect<CounterEvent>) {
        match event {
            CounterEvent::Increment => {
                let new_model = CounterModel {
                    count: model.count + 1,
                };
                (new_model, self.effects.on_increment_side_effect())
            }
        }
    }

    fn view(&self, model: &CounterModel, emitter: &Emitter<CounterEvent>) -> CounterProps {
        let emitter = emitter.clone();
        CounterProps {
            count: model.count,
            on_increment: Box::new(move || {
                emitter.emit(CounterEvent::Increment);
            }),
        }
    }
}
