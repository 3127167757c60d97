//! Built-in code templates for the code generator.
//!
//! Choosing a template produces a code-generation result locally, without a
//! backend round trip.

use crate::tool::format_code_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTemplate {
    pub language: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

impl CodeTemplate {
    /// Explanation shown alongside the template code.
    pub fn explanation(&self) -> String {
        format!(
            "Template: {}\n\n{}\n\nThis is a pre-built template. You can modify it according to your needs.",
            self.name, self.description
        )
    }

    /// The template rendered the same way as a generated code result.
    pub fn as_result(&self) -> String {
        format_code_result(self.language, self.code, &self.explanation())
    }
}

const TEMPLATES: &[CodeTemplate] = &[
    CodeTemplate {
        language: "python",
        name: "FastAPI REST API",
        description: "A complete FastAPI REST API with CRUD operations",
        code: r#"from fastapi import FastAPI, HTTPException
from pydantic import BaseModel
from typing import Dict, List, Optional

app = FastAPI(title="My API", version="1.0.0")


class ItemCreate(BaseModel):
    name: str
    description: Optional[str] = None
    price: float


class Item(ItemCreate):
    id: int


items_db: Dict[int, Item] = {}
next_id = 1


@app.get("/items", response_model=List[Item])
async def get_items():
    return list(items_db.values())


@app.get("/items/{item_id}", response_model=Item)
async def get_item(item_id: int):
    if item_id not in items_db:
        raise HTTPException(status_code=404, detail="Item not found")
    return items_db[item_id]


@app.post("/items", response_model=Item)
async def create_item(item: ItemCreate):
    global next_id
    created = Item(id=next_id, **item.dict())
    items_db[next_id] = created
    next_id += 1
    return created


@app.delete("/items/{item_id}")
async def delete_item(item_id: int):
    if items_db.pop(item_id, None) is None:
        raise HTTPException(status_code=404, detail="Item not found")
    return {"message": "Item deleted"}
"#,
    },
    CodeTemplate {
        language: "python",
        name: "Data Analysis with Pandas",
        description: "Data analysis template with pandas and visualization",
        code: r#"import pandas as pd
import matplotlib.pyplot as plt


def load_data(path: str) -> pd.DataFrame:
    df = pd.read_csv(path)
    return df.dropna()


def summarize(df: pd.DataFrame) -> None:
    print(df.describe())
    print(df.dtypes)


def plot_column(df: pd.DataFrame, column: str) -> None:
    df[column].hist(bins=30)
    plt.title(f"Distribution of {column}")
    plt.xlabel(column)
    plt.ylabel("Count")
    plt.show()


if __name__ == "__main__":
    data = load_data("data.csv")
    summarize(data)
    plot_column(data, data.columns[0])
"#,
    },
    CodeTemplate {
        language: "python",
        name: "Django Model & View",
        description: "Django model with corresponding views and serializers",
        code: r#"# models.py
from django.db import models
from django.contrib.auth.models import User

class Category(models.Model):
    name = models.CharField(max_length=100)
    description = models.TextField(blank=True)
    created_at = models.DateTimeField(auto_now_add=True)

    class Meta:
        verbose_name_plural = "Categories"

    def __str__(self):
        return self.name

class Post(models.Model):
    title = models.CharField(max_length=200)
    content = models.TextField()
    author = models.ForeignKey(User, on_delete=models.CASCADE)
    category = models.ForeignKey(Category, on_delete=models.SET_NULL, null=True)
    created_at = models.DateTimeField(auto_now_add=True)
    updated_at = models.DateTimeField(auto_now=True)
    is_published = models.BooleanField(default=False)

    class Meta:
        ordering = ['-created_at']

    def __str__(self):
        return self.title

# serializers.py (Django REST Framework)
from rest_framework import serializers
from .models import Post, Category

class CategorySerializer(serializers.ModelSerializer):
    class Meta:
        model = Category
        fields = ['id', 'name', 'description', 'created_at']

class PostSerializer(serializers.ModelSerializer):
    author_name = serializers.CharField(source='author.username', read_only=True)
    category_name = serializers.CharField(source='category.name', read_only=True)

    class Meta:
        model = Post
        fields = ['id', 'title', 'content', 'author', 'author_name',
                 'category', 'category_name', 'created_at', 'updated_at', 'is_published']

# views.py
from rest_framework import viewsets, permissions
from rest_framework.decorators import action
from rest_framework.response import Response
from django.shortcuts import get_object_or_404
from .models import Post, Category
from .serializers import PostSerializer, CategorySerializer

class CategoryViewSet(viewsets.ModelViewSet):
    queryset = Category.objects.all()
    serializer_class = CategorySerializer
    permission_classes = [permissions.IsAuthenticatedOrReadOnly]

class PostViewSet(viewsets.ModelViewSet):
    queryset = Post.objects.all()
    serializer_class = PostSerializer
    permission_classes = [permissions.IsAuthenticatedOrReadOnly]

    def perform_create(self, serializer):
        serializer.save(author=self.request.user)

    @action(detail=False, methods=['get'])
    def published(self, request):
        published_posts = Post.objects.filter(is_published=True)
        serializer = self.get_serializer(published_posts, many=True)
        return Response(serializer.data)

    @action(detail=True, methods=['post'])
    def publish(self, request, pk=None):
        post = self.get_object()
        post.is_published = True
        post.save()
        return Response({'status': 'published'})

# urls.py
from django.urls import path, include
from rest_framework.routers import DefaultRouter
from . import views

router = DefaultRouter()
router.register(r'categories', views.CategoryViewSet)
router.register(r'posts', views.PostViewSet)

urlpatterns = [
    path('api/', include(router.urls)),
]
"#,
    },
    CodeTemplate {
        language: "javascript",
        name: "React Component with Hooks",
        description: "A modern React component using hooks with state management",
        code: r#"import React, { useEffect, useState } from 'react';

export default function UserList({ endpoint }) {
  const [users, setUsers] = useState([]);
  const [loading, setLoading] = useState(true);
  const [error, setError] = useState(null);

  useEffect(() => {
    fetch(endpoint)
      .then((res) => res.json())
      .then(setUsers)
      .catch(setError)
      .finally(() => setLoading(false));
  }, [endpoint]);

  if (loading) return <p>Loading...</p>;
  if (error) return <p>Something went wrong.</p>;

  return (
    <ul>
      {users.map((user) => (
        <li key={user.id}>{user.name}</li>
      ))}
    </ul>
  );
}
"#,
    },
    CodeTemplate {
        language: "javascript",
        name: "Express.js REST API",
        description: "A complete Express.js REST API with middleware and error handling",
        code: r#"const express = require('express');

const app = express();
app.use(express.json());

const items = new Map();
let nextId = 1;

app.get('/items', (req, res) => {
  res.json([...items.values()]);
});

app.post('/items', (req, res) => {
  const item = { id: nextId++, ...req.body };
  items.set(item.id, item);
  res.status(201).json(item);
});

app.delete('/items/:id', (req, res) => {
  if (!items.delete(Number(req.params.id))) {
    return res.status(404).json({ error: 'Item not found' });
  }
  res.status(204).end();
});

app.use((err, req, res, next) => {
  console.error(err);
  res.status(500).json({ error: 'Internal server error' });
});

app.listen(3000, () => console.log('Listening on port 3000'));
"#,
    },
];

/// Templates available for a language, in catalog order.
pub fn templates_for(language: &str) -> Vec<&'static CodeTemplate> {
    TEMPLATES.iter().filter(|t| t.language == language).collect()
}

/// Looks up a template by language and exact name.
pub fn find_template(language: &str, name: &str) -> Option<&'static CodeTemplate> {
    TEMPLATES
        .iter()
        .find(|t| t.language == language && t.name == name)
}

/// Languages that have at least one template.
pub fn template_languages() -> Vec<&'static str> {
    let mut languages: Vec<&'static str> = TEMPLATES.iter().map(|t| t.language).collect();
    languages.dedup();
    languages
}
