use crate::config::{self, Config, Overrides};
use crate::events::AppEvent;
use crate::gui::picker::{self, Scene};
use crate::gui::theme::{self, ThemeColors};
use bedtime_core::{Point, TimeOfDay};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub scene: Rc<RefCell<Scene>>,
    pub readout: String,
    pub overrides: Overrides,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Changed(TimeOfDay, TimeOfDay),
    DragEnded,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    fn connect_listener(scene: &mut Scene, sender: &ComponentSender<Self>) {
        let sender = sender.clone();
        scene
            .picker
            .set_on_change(move |bed, wake| sender.input(AppMsg::Changed(bed, wake)));
    }

    fn scene_rebuilt(&mut self, sender: &ComponentSender<Self>) {
        let mut scene = self.scene.borrow_mut();
        Self::connect_listener(&mut scene, sender);
        self.readout = scene.readout();
        self.drawing_area.queue_draw();
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, Overrides, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Bedtime"),
            set_default_size: (480, 560),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[scene = model.scene.clone(), sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        scene.borrow_mut().picker.pointer_cancel();
                        sender.input(AppMsg::DragEnded);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "bedtime-dial",

                    connect_resize[scene = model.scene.clone()] => move |_, width, height| {
                        scene.borrow_mut().resize(width as f64, height as f64);
                    },

                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[scene = model.scene.clone()] => move |gesture, x, y| {
                            let state = if scene.borrow_mut().picker.pointer_down(Point::new(x, y)) {
                                gtk::EventSequenceState::Claimed
                            } else {
                                gtk::EventSequenceState::Denied
                            };
                            gesture.set_state(state);
                        },
                        connect_drag_update[scene = model.scene.clone()] => move |gesture, dx, dy| {
                            if let Some((x, y)) = gesture.start_point() {
                                scene.borrow_mut().picker.pointer_move(Point::new(x + dx, y + dy));
                            }
                        },
                        connect_drag_end[scene = model.scene.clone(), sender] => move |_, _, _| {
                            scene.borrow_mut().picker.pointer_up();
                            sender.input(AppMsg::DragEnded);
                        },
                        connect_cancel[scene = model.scene.clone(), sender] => move |_, _| {
                            scene.borrow_mut().picker.pointer_cancel();
                            sender.input(AppMsg::DragEnded);
                        },
                    },
                },

                gtk::Label {
                    add_css_class: "bedtime-readout",
                    #[watch]
                    set_label: &model.readout,
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, overrides, rx) = init;

        theme::load_css();

        let mut scene = Scene::new(&config);
        Self::connect_listener(&mut scene, &sender);

        let model = AppModel {
            readout: scene.readout(),
            scene: Rc::new(RefCell::new(scene)),
            overrides,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let scene_draw = model.scene.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let scene = scene_draw.borrow();
                let colors = ThemeColors::from_context(&drawing_area.style_context(), &scene.theme);
                if let Err(e) = picker::draw(cr, &scene, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Changed(bed, wake) => {
                self.readout = picker::readout(bed, wake);
                self.drawing_area.queue_draw();
            }
            AppMsg::DragEnded => {
                let rebuilt = self.scene.borrow_mut().apply_pending();
                if rebuilt {
                    self.scene_rebuilt(&sender);
                    log::info!("Configuration reloaded after drag");
                }
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(mut new_config) => {
                    self.overrides.apply(&mut new_config);
                    let rebuilt = self.scene.borrow_mut().request_rebuild(new_config);
                    if rebuilt {
                        self.scene_rebuilt(&sender);
                        log::info!("Configuration reloaded");
                    }
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
